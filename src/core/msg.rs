use serde::{Deserialize, Serialize};

pub mod feed;
pub mod system;
pub mod ui;

use feed::FeedMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Pagination actions (delegated to the feed reducer)
    Feed(FeedMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Navigation and activation (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Feed(feed) => feed.is_frequent(),
            Msg::System(system) => system.is_frequent(),
            Msg::Ui(_) => false,
        }
    }
}

impl From<FeedMsg> for Msg {
    fn from(msg: FeedMsg) -> Self {
        Msg::Feed(msg)
    }
}

impl From<SystemMsg> for Msg {
    fn from(msg: SystemMsg) -> Self {
        Msg::System(msg)
    }
}
