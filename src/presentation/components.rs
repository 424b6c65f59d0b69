//! Component collection
//!
//! Components are stateless renderers apart from scroll bookkeeping; they
//! receive the state snapshot and its projection on every frame.

use std::ops::Range;

use ratatui::prelude::*;

use crate::{
    core::{projection::FeedView, state::AppState},
    infrastructure::tui::Frame,
};

pub mod feed_list;
pub mod footer;
pub mod header;

pub use feed_list::FeedListComponent;
pub use footer::FooterComponent;
pub use header::HeaderComponent;

pub struct Components {
    pub header: HeaderComponent,
    pub feed_list: FeedListComponent,
    pub footer: FooterComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent::new(),
            feed_list: FeedListComponent::new(),
            footer: FooterComponent::new(),
        }
    }

    /// Render the whole screen and return the list slots that ended up
    /// visible (the sentinel slot included)
    pub fn render(&mut self, frame: &mut Frame<'_>, state: &AppState, view: &FeedView<'_>) -> Range<usize> {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(2), // heading
                Constraint::Min(0),    // feed
                Constraint::Length(2), // notices and key hints
            ])
            .split(frame.area());

        self.header.view(state, frame, layout[0]);
        let visible = self
            .feed_list
            .view(view, state.ui.selected, frame, layout[1]);
        self.footer.view(state, view, frame, layout[2]);
        visible
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
