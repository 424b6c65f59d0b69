use ratatui::{prelude::*, widgets::*};

use crate::presentation::widgets::RANK_WIDTH;

const SHADE: char = '░';

/// Stand-in for a story whose body has not arrived yet.
///
/// Bar lengths vary with the rank so a page of placeholders does not look
/// like a solid block.
#[derive(Clone, Copy, Debug)]
pub struct PlaceholderWidget {
    rank: usize,
}

impl PlaceholderWidget {
    pub fn new(rank: usize) -> Self {
        Self { rank }
    }

    /// Title and meta bar lengths for a given row width
    pub fn bar_widths(&self, width: usize) -> (usize, usize) {
        let available = width.saturating_sub(RANK_WIDTH);
        let title = (available * (55 + (self.rank * 17) % 35) / 100).max(1);
        let meta = (available * (25 + (self.rank * 11) % 20) / 100).max(1);
        (title.min(available), meta.min(available))
    }
}

impl Widget for PlaceholderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, meta) = self.bar_widths(area.width as usize);
        let style = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{:>3}. ", self.rank), style),
                Span::styled(SHADE.to_string().repeat(title), style),
            ]),
            Line::from(vec![
                Span::raw(" ".repeat(RANK_WIDTH)),
                Span::styled(SHADE.to_string().repeat(meta), style),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 80)]
    #[case(25, 80)]
    #[case(7, 12)]
    #[case(3, 6)]
    fn test_bar_widths_fit(#[case] rank: usize, #[case] width: usize) {
        let (title, meta) = PlaceholderWidget::new(rank).bar_widths(width);
        let available = width - RANK_WIDTH;
        assert!(title >= 1 && title <= available);
        assert!(meta >= 1 && meta <= available);
    }

    #[test]
    fn test_render_shaded_bars() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        PlaceholderWidget::new(2).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(2, 0)].symbol(), "2");
        assert_eq!(buf[(5, 0)].symbol(), "░");
        assert_eq!(buf[(5, 1)].symbol(), "░");
    }
}
