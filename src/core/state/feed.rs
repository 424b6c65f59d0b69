//! Pagination state for the ranked feed
//!
//! `FeedState` is the aggregate root of a viewing session: the ranked ID list,
//! the item bodies merged so far, the page counter and the sticky offline flag.
//! All transitions go through [`reduce`], which is pure.

use std::collections::{HashMap, HashSet};

use crate::{
    core::{msg::feed::FeedMsg, state::network::NetworkState},
    domain::item::{Item, ItemId},
};

/// Default page size of the feed
pub const ITEMS_PER_PAGE: usize = 25;

/// Merged item bodies keyed by id
pub type ItemsCollection = HashMap<ItemId, Item>;

/// Pagination state of one viewing session
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub item_list: NetworkState<Vec<ItemId>>,
    pub items: NetworkState<ItemsCollection>,
    /// 1-based page counter, only ever incremented
    pub page: usize,
    /// Sticky for the lifetime of the session
    pub offline: bool,
    /// Ids whose fetch settled with an error; they keep their placeholder
    pub failed: HashSet<ItemId>,
    items_per_page: usize,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl FeedState {
    /// Initial state: both resources loading, first page, online.
    ///
    /// A page size of zero is treated as one.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            item_list: NetworkState::pending(),
            items: NetworkState::pending(),
            page: 1,
            offline: false,
            failed: HashSet::new(),
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Apply one action in place
    pub fn apply(&mut self, msg: FeedMsg) {
        match msg {
            FeedMsg::ItemListLoading => self.item_list.start_loading(),
            FeedMsg::ItemListLoaded(ids) => self.item_list.resolve(ids),
            FeedMsg::ItemListError(message) => self.item_list.fail(message),

            FeedMsg::ItemsLoading => self.items.start_loading(),
            FeedMsg::ItemsLoaded => self.items.loading = false,
            FeedMsg::ItemLoaded(item) => {
                if !self.belongs_to_list(&item.id) {
                    return;
                }
                self.failed.remove(&item.id);
                self.items
                    .data
                    .get_or_insert_with(HashMap::new)
                    .insert(item.id, item);
                self.items.loading = !self.expected_settled();
            }
            FeedMsg::ItemsError { id, message } => {
                self.items.error = Some(message);
                if self.belongs_to_list(&id) && !self.has_item(&id) {
                    self.failed.insert(id);
                    self.items.loading = !self.expected_settled();
                }
            }

            FeedMsg::ChangePage => self.page = self.page.saturating_add(1),
            FeedMsg::ProbablyOffline => self.offline = true,
        }
    }

    fn belongs_to_list(&self, id: &ItemId) -> bool {
        match &self.item_list.data {
            Some(ids) => ids.contains(id),
            None => true,
        }
    }

    /// Number of item bodies merged so far
    pub fn merged_count(&self) -> usize {
        self.items.data.as_ref().map_or(0, HashMap::len)
    }

    /// Length of the ranked list, once it is known
    pub fn list_len(&self) -> Option<usize> {
        self.item_list.data.as_ref().map(Vec::len)
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.data.as_ref().and_then(|items| items.get(id))
    }

    pub fn has_item(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }

    /// Page count that is actually shown; one behind the counter when offline
    pub fn effective_page(&self) -> usize {
        if self.offline {
            self.page.saturating_sub(1)
        } else {
            self.page
        }
    }

    /// Rows the presentation should show, capped at the ranked list length
    pub fn expected_visible_count(&self) -> usize {
        let count = self.effective_page().saturating_mul(self.items_per_page);
        match self.list_len() {
            Some(len) => count.min(len),
            None => count,
        }
    }

    /// Every expected row has settled, either merged or failed.
    ///
    /// Drives `items.loading`. Before the ranked list is known only the
    /// merged count can be compared.
    pub fn expected_settled(&self) -> bool {
        let expected = self.expected_visible_count();
        match self.item_list.data.as_deref() {
            Some(ids) => ids[..expected]
                .iter()
                .all(|id| self.has_item(id) || self.failed.contains(id)),
            None => self.merged_count() >= expected,
        }
    }

    /// More of the ranked list remains, and the first page has started arriving
    pub fn more_items_available(&self) -> bool {
        let merged = self.merged_count();
        match self.list_len() {
            Some(len) => merged != len && merged > 0,
            None => false,
        }
    }

    /// Whether the pager may advance the page
    pub fn can_load_more(&self) -> bool {
        self.more_items_available() && !self.items.loading && !self.offline
    }

    /// IDs of the current page: `[(page-1)*n, page*n)` clipped to the list
    pub fn page_window(&self) -> &[ItemId] {
        let Some(ids) = self.item_list.data.as_deref() else {
            return &[];
        };
        let start = (self.page - 1).saturating_mul(self.items_per_page);
        if start >= ids.len() {
            return &[];
        }
        let end = start.saturating_add(self.items_per_page).min(ids.len());
        &ids[start..end]
    }

    /// Changes exactly when the page window has to be fetched again:
    /// the list became available, or the page advanced.
    pub fn page_window_key(&self) -> Option<(usize, usize)> {
        match (&self.item_list.data, self.item_list.loading) {
            (Some(ids), false) => Some((self.page, ids.len())),
            _ => None,
        }
    }
}

/// The pagination reducer: `(state, action) -> state`
pub fn reduce(mut state: FeedState, msg: FeedMsg) -> FeedState {
    state.apply(msg);
    state
}
