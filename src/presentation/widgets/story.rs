use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::{
        date::format_date,
        item::Item,
        text::{display_host, truncate_to_width},
    },
    presentation::widgets::RANK_WIDTH,
};

/// "author | MMM D, YYYY | host", skipping the parts an item lacks
pub fn meta_line(item: &Item, date: &str) -> String {
    let host = item.url.as_deref().and_then(display_host);
    [Some(item.author.as_str()), Some(date), host.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// One loaded story: numbered title over a dimmed meta line
#[derive(Clone, Debug)]
pub struct StoryWidget<'a> {
    rank: usize,
    item: &'a Item,
    highlight: bool,
}

impl<'a> StoryWidget<'a> {
    pub fn new(rank: usize, item: &'a Item) -> Self {
        Self {
            rank,
            item,
            highlight: false,
        }
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    fn title_line(&self, width: usize) -> Line<'a> {
        let rank = format!("{:>3}. ", self.rank);
        let title = truncate_to_width(&self.item.title, width.saturating_sub(RANK_WIDTH));
        let title_style = if self.highlight {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().bold()
        };
        Line::from(vec![
            Span::styled(rank, Style::default().fg(Color::DarkGray)),
            Span::styled(title, title_style),
        ])
    }

    fn meta(&self, width: usize) -> Line<'a> {
        let meta = meta_line(self.item, &format_date(self.item.submitted_at));
        Line::from(vec![
            Span::raw(" ".repeat(RANK_WIDTH)),
            Span::styled(
                truncate_to_width(&meta, width.saturating_sub(RANK_WIDTH)),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

impl Widget for StoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let mut lines = vec![self.title_line(width), self.meta(width)];
        if self.highlight {
            lines[0] = lines[0].clone().patch_style(Style::default().reversed());
        }
        Paragraph::new(lines).render(area, buf);
    }
}
