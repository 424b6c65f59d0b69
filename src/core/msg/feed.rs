use serde::{Deserialize, Serialize};

use crate::domain::item::{Item, ItemId};

/// Actions understood by the pagination reducer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedMsg {
    /// The ranked ID list is being requested
    ItemListLoading,
    /// The ranked ID list arrived
    ItemListLoaded(Vec<ItemId>),
    /// Fetching the ranked ID list failed
    ItemListError(String),

    /// Item bodies for a page window are being requested
    ItemsLoading,
    /// The page window had nothing left to request
    ItemsLoaded,
    /// One item body arrived (order is not guaranteed)
    ItemLoaded(Item),
    /// A non-connectivity failure fetching one item; the item counts as settled
    ItemsError { id: ItemId, message: String },

    /// The sentinel became visible: advance to the next page
    ChangePage,
    /// A connectivity-class failure was observed (sticky)
    ProbablyOffline,
}

impl FeedMsg {
    /// Item arrivals come in bursts of a page at a time
    pub fn is_frequent(&self) -> bool {
        matches!(self, FeedMsg::ItemLoaded(_))
    }
}
