use serde::{Deserialize, Serialize};

/// Navigation over the projected rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    /// Open the selected story in the browser
    OpenSelected,
}
