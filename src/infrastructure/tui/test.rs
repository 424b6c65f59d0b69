use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Headless terminal backed by ratatui's `TestBackend`.
/// - enter/exit only record that they happened.
/// - next() pops scripted events and yields `None` once they run out.
/// - the last drawn buffer can be read back as text.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let term = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// The current screen, one string per terminal line
    pub fn screen_lines(&self) -> Vec<String> {
        let buffer = self.term.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// The current screen as a single string
    pub fn screen_text(&self) -> String {
        self.screen_lines().join("\n")
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(future::ready(self.events.pop_front()))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::widgets::Paragraph;

    use super::*;

    #[tokio::test]
    async fn test_scripted_events_then_none() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick, Event::Render])?;

        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, Some(Event::Render));
        assert_eq!(tui.next().await, None);
        Ok(())
    }

    #[test]
    fn test_screen_text() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.draw(&mut |frame: &mut Frame<'_>| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        })?;

        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_lines(), vec!["hello".to_string(), String::new()]);
        Ok(())
    }
}
