pub mod feed;
pub mod network;
pub mod system;
pub mod ui;

use feed::FeedState;
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub feed: FeedState,
    pub ui: UiState,
    pub system: SystemState,
}

impl AppState {
    /// Initialize AppState with the configured page size
    pub fn new(items_per_page: usize) -> Self {
        Self {
            feed: FeedState::new(items_per_page),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_new() {
        let state = AppState::new(10);
        assert_eq!(state.feed.items_per_page(), 10);
        assert_eq!(state.ui.selected, None);
        assert!(!state.system.should_quit);
    }
}
