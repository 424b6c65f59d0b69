use ratatui::{prelude::*, widgets::*};

use crate::{
    core::{
        projection::{FeedView, OFFLINE_NOTICE},
        state::AppState,
    },
    infrastructure::tui::Frame,
};

pub const KEY_HINTS: &str = "j/k move  g/G top/bottom  enter open  q quit";

#[derive(Debug, Clone, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    /// First line: offline notice, else the status message. Second: key hints.
    pub fn notice<'a>(state: &'a AppState, view: &FeedView<'_>) -> Option<&'a str> {
        if view.show_offline_notice {
            Some(OFFLINE_NOTICE)
        } else {
            state.system.status_message.as_deref()
        }
    }

    pub fn view(&self, state: &AppState, view: &FeedView<'_>, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);

        if let Some(notice) = Self::notice(state, view) {
            let style = if view.show_offline_notice {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray).italic()
            };
            frame.render_widget(Paragraph::new(Span::styled(notice, style)), layout[0]);
        }

        let counts = format!("{}/{}", view.story_count(), view.rows.len());
        let hints = Line::from(vec![
            Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(counts, Style::default().fg(Color::DarkGray).italic()),
        ]);
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().bg(Color::Black)),
            layout[1],
        );
    }
}
