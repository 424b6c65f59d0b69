use std::ops::Range;

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::projection::{FeedView, Row, LOADING_MORE},
    infrastructure::tui::Frame,
    presentation::widgets::{placeholder::PlaceholderWidget, story::StoryWidget, ROW_HEIGHT},
};

/// Scrollable feed: one slot per projected row, followed by the sentinel slot.
///
/// The sentinel slot is a single line; it only comes into view once the last
/// row has been scrolled to.
#[derive(Debug, Clone, Default)]
pub struct FeedListComponent {
    offset: usize,
}

fn slot_height(rows: usize, index: usize) -> u16 {
    if index < rows {
        ROW_HEIGHT
    } else {
        1
    }
}

impl FeedListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// First slot drawn at the top of the list area
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the offset so that the slot holding the selection fits in
    /// `height` lines. Selecting the last row also brings the sentinel in.
    pub fn scroll_to(&mut self, rows: usize, selected: Option<usize>, height: u16) {
        self.offset = self.offset.min(rows);
        let Some(selected) = selected else {
            return;
        };

        let focus = if selected + 1 >= rows { rows } else { selected };
        if focus < self.offset {
            self.offset = focus;
        }
        while self.offset < focus {
            let span = (focus - self.offset) as u16 * ROW_HEIGHT + slot_height(rows, focus);
            if span <= height {
                break;
            }
            self.offset += 1;
        }
    }

    /// Draw the list and return the slot range that is at least partly visible
    pub fn view(
        &mut self,
        view: &FeedView<'_>,
        selected: Option<usize>,
        frame: &mut Frame<'_>,
        area: Rect,
    ) -> Range<usize> {
        if let Some(error) = &view.error {
            self.offset = 0;
            let message = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(message, area);
            return 0..0;
        }

        let rows = view.rows.len();
        self.scroll_to(rows, selected, area.height);

        let mut y = area.y;
        let mut index = self.offset;
        while index <= rows && y < area.bottom() {
            let height = slot_height(rows, index).min(area.bottom() - y);
            let slot = Rect::new(area.x, y, area.width, height);
            match view.rows.get(index) {
                Some(Row::Story(item)) => frame.render_widget(
                    StoryWidget::new(index + 1, item).highlight(selected == Some(index)),
                    slot,
                ),
                Some(Row::Placeholder) => {
                    frame.render_widget(PlaceholderWidget::new(index + 1), slot)
                }
                None if view.show_loading_more => frame.render_widget(
                    Paragraph::new(LOADING_MORE)
                        .style(Style::default().fg(Color::DarkGray).italic())
                        .alignment(Alignment::Center),
                    slot,
                ),
                None => {}
            }
            y += height;
            index += 1;
        }

        self.offset..index
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::nothing_selected(25, None, 30, 0)]
    #[case::selection_fits(25, Some(5), 30, 0)]
    #[case::selection_below(25, Some(12), 30, 3)]
    #[case::last_row_brings_sentinel(25, Some(24), 30, 16)]
    #[case::short_list(3, Some(2), 30, 0)]
    fn test_scroll_to(
        #[case] rows: usize,
        #[case] selected: Option<usize>,
        #[case] height: u16,
        #[case] expected: usize,
    ) {
        let mut list = FeedListComponent::new();
        list.scroll_to(rows, selected, height);
        assert_eq!(list.offset(), expected);
    }

    #[test]
    fn test_scroll_back_up() {
        let mut list = FeedListComponent::new();
        list.scroll_to(25, Some(24), 30);
        list.scroll_to(25, Some(2), 30);
        assert_eq!(list.offset(), 2);
    }

    #[test]
    fn test_offset_clamped_when_rows_shrink() {
        let mut list = FeedListComponent::new();
        list.scroll_to(25, Some(24), 30);
        list.scroll_to(0, None, 30);
        assert_eq!(list.offset(), 0);
    }
}
