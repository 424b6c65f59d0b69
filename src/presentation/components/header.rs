use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, infrastructure::tui::Frame};

pub const HEADING: &str = "Top stories";

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![Span::styled(
            HEADING,
            Style::default().fg(Color::LightRed).bold(),
        )];
        if let Some(len) = state.feed.list_len() {
            spans.push(Span::styled(
                format!("  page {} · {len} ranked", state.feed.page),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
