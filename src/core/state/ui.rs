use crate::core::msg::ui::UiMsg;

/// Selection over the projected rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Index of the highlighted row, if any row exists
    pub selected: Option<usize>,
}

impl UiState {
    /// Move the selection within `row_count` rows.
    ///
    /// `OpenSelected` is resolved by the top-level update, which knows the rows.
    pub fn update(&mut self, msg: UiMsg, row_count: usize) {
        if row_count == 0 {
            self.selected = None;
            return;
        }
        let last = row_count - 1;

        self.selected = match (msg, self.selected) {
            (UiMsg::ScrollDown, Some(current)) => Some((current + 1).min(last)),
            (UiMsg::ScrollUp, Some(current)) => Some(current.saturating_sub(1).min(last)),
            (UiMsg::ScrollDown | UiMsg::ScrollUp | UiMsg::ScrollToTop, _) => Some(0),
            (UiMsg::ScrollToBottom, _) => Some(last),
            (UiMsg::OpenSelected, current) => current.map(|index| index.min(last)),
        };
    }
}
