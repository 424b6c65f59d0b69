#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use hnfeed::{
    core::state::AppState,
    domain::item::{Item, ItemId},
    infrastructure::{api::FeedSource, error::FetchError},
    integration::runtime::Runtime,
};

pub fn item(id: u64) -> Item {
    Item {
        id: ItemId(id),
        title: format!("Story number {id}"),
        author: format!("user{id}"),
        url: Some(format!("https://example.com/story/{id}")),
        submitted_at: 1_700_000_000 + id as i64,
    }
}

pub fn ids(range: std::ops::RangeInclusive<u64>) -> Vec<ItemId> {
    range.map(ItemId).collect()
}

/// In-memory feed: a ranked list, item bodies, and scripted failures
#[derive(Default)]
pub struct FakeSource {
    list: Option<Vec<ItemId>>,
    list_error: Option<FetchError>,
    items: HashMap<ItemId, Item>,
    failures: HashMap<ItemId, FetchError>,
    item_requests: Mutex<Vec<ItemId>>,
    list_requests: AtomicUsize,
}

impl FakeSource {
    /// A ranked list `1..=n` where every id has a body
    pub fn with_stories(n: u64) -> Self {
        Self {
            list: Some(ids(1..=n)),
            items: (1..=n).map(|id| (ItemId(id), item(id))).collect(),
            ..Self::default()
        }
    }

    pub fn failing_list(error: FetchError) -> Self {
        Self {
            list_error: Some(error),
            ..Self::default()
        }
    }

    pub fn fail_item(mut self, id: u64, error: FetchError) -> Self {
        self.failures.insert(ItemId(id), error);
        self
    }

    pub fn item_requests(&self) -> Vec<ItemId> {
        let mut requests = self.item_requests.lock().unwrap().clone();
        requests.sort();
        requests
    }

    pub fn list_requests(&self) -> usize {
        self.list_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for FakeSource {
    async fn top_stories(&self) -> Result<Vec<ItemId>, FetchError> {
        self.list_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.list_error {
            return Err(error.clone());
        }
        Ok(self.list.clone().unwrap_or_default())
    }

    async fn item(&self, id: ItemId) -> Result<Item, FetchError> {
        self.item_requests.lock().unwrap().push(id);
        tokio::task::yield_now().await;
        if let Some(error) = self.failures.get(&id) {
            return Err(error.clone());
        }
        self.items.get(&id).cloned().ok_or(FetchError::Missing(id))
    }
}

/// Drive turns (waiting for dispatches when idle) until `done` holds
pub async fn run_until<F>(runtime: &mut Runtime, done: F)
where
    F: Fn(&AppState) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        while !done(runtime.state()) {
            if !runtime.has_pending() {
                runtime.wait_for_dispatch().await;
            }
            runtime.process_turn();
        }
    })
    .await
    .expect("runtime did not settle in time");
}
