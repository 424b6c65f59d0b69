//! Fetch orchestration
//!
//! Calls the feed API, turns every outcome into a `FeedMsg` and dispatches it.
//! Nothing here touches state directly; failures never escape as errors.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    core::{msg::feed::FeedMsg, state::feed::FeedState},
    domain::item::ItemId,
    infrastructure::{api::FeedSource, dispatcher::Dispatcher, error::is_connectivity_message},
};

/// Route an item failure: connectivity-class messages become the sticky
/// offline flag, everything else is a per-item error.
pub fn classify_item_failure(id: ItemId, message: &str) -> FeedMsg {
    if is_connectivity_message(message) {
        FeedMsg::ProbablyOffline
    } else {
        FeedMsg::ItemsError {
            id,
            message: message.to_string(),
        }
    }
}

pub struct FetchOrchestrator {
    source: Arc<dyn FeedSource>,
    dispatcher: Dispatcher,
}

impl FetchOrchestrator {
    pub fn new(source: Arc<dyn FeedSource>, dispatcher: Dispatcher) -> Self {
        Self { source, dispatcher }
    }

    /// Fetch the ranked list once; any failure becomes `ItemListError`
    pub async fn fetch_item_list(&self) {
        match self.source.top_stories().await {
            Ok(ids) => {
                log::info!("Fetched {} ranked item ids", ids.len());
                self.dispatcher.dispatch(FeedMsg::ItemListLoaded(ids));
            }
            Err(err) => {
                log::warn!("Fetching the item list failed: {err}");
                self.dispatcher.dispatch(FeedMsg::ItemListError(err.to_string()));
            }
        }
    }

    /// Fetch one item body.
    ///
    /// A successful result is deferred to the next turn so that a page worth
    /// of near-simultaneous completions is merged in one go.
    pub async fn fetch_item(&self, id: ItemId) {
        match self.source.item(id).await {
            Ok(item) => self.dispatcher.defer(FeedMsg::ItemLoaded(item)),
            Err(err) => {
                let message = err.to_string();
                log::warn!("Fetching item {id} failed: {message}");
                self.dispatcher.dispatch(classify_item_failure(id, &message));
            }
        }
    }

    pub fn spawn_item_list(self: &Arc<Self>) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.fetch_item_list().await })
    }

    /// Issue one independent request per id of the current page window that
    /// is not merged yet.
    ///
    /// When there is nothing to request the page is settled right away.
    pub fn fetch_page_window(self: &Arc<Self>, state: &FeedState) -> Vec<JoinHandle<()>> {
        let window = state.page_window();
        let pending: Vec<ItemId> = window
            .iter()
            .filter(|id| !state.has_item(id))
            .copied()
            .collect();

        if pending.is_empty() {
            log::debug!(
                "Page {} has nothing to fetch ({} ids in window)",
                state.page,
                window.len()
            );
            self.dispatcher.dispatch(FeedMsg::ItemsLoaded);
            return Vec::new();
        }

        log::debug!("Fetching {} items for page {}", pending.len(), state.page);
        self.dispatcher.dispatch(FeedMsg::ItemsLoading);
        pending
            .into_iter()
            .map(|id| {
                let this = Arc::clone(self);
                tokio::spawn(async move { this.fetch_item(id).await })
            })
            .collect()
    }
}
