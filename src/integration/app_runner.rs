use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;

use crate::{
    core::{
        msg::feed::FeedMsg,
        pager::Pager,
        projection::project,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
    },
    infrastructure::{
        api::FeedSource,
        config::Config,
        orchestrator::FetchOrchestrator,
        tui::{Event, Frame, TuiLike},
        viewport::ViewportWatcher,
    },
    integration::{cmd_executor::CmdExecutor, runtime::Runtime},
    presentation::components::Components,
};

/// Drives the app: terminal events and async dispatches wake the loop, each
/// wake-up is one runtime turn, and every render re-syncs the pager with the
/// rows that ended up on screen.
pub struct AppRunner<T: TuiLike> {
    config: Config,
    runtime: Runtime,
    tui: T,
    components: Components,
    pager: Pager<ViewportWatcher>,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(config: Config, source: Arc<dyn FeedSource>, tui: T) -> Self {
        let mut runtime = Runtime::new(AppState::new(config.feed.items_per_page));
        let dispatcher = runtime.dispatcher();
        let orchestrator = Arc::new(FetchOrchestrator::new(source, dispatcher.clone()));
        runtime.set_executor(CmdExecutor::new(orchestrator, dispatcher));

        Self {
            config,
            runtime,
            tui,
            components: Components::new(),
            pager: Pager::new(ViewportWatcher::new()),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub fn pager(&self) -> &Pager<ViewportWatcher> {
        &self.pager
    }

    /// Enter the terminal, run until quit, then restore the terminal
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.runtime.start();

        let result = self.main_loop().await;

        self.pager.teardown();
        self.tui.exit()?;
        result
    }

    async fn main_loop(&mut self) -> Result<()> {
        loop {
            if !self.runtime.has_pending() {
                let event = tokio::select! {
                    event = self.tui.next() => Some(event),
                    () = self.runtime.wait_for_dispatch() => None,
                };
                if let Some(event) = event {
                    self.handle_event(event)?;
                }
            }

            self.runtime.process_turn();

            if self.runtime.state().system.should_quit {
                return Ok(());
            }
        }
    }

    /// Turn one terminal event into messages (or a frame). A closed event
    /// stream ends the session.
    pub fn handle_event(&mut self, event: Option<Event>) -> Result<()> {
        let raw = match event {
            None | Some(Event::Closed) => Some(RawMsg::Quit),
            Some(Event::Init) => None,
            Some(Event::Tick) => Some(RawMsg::Tick),
            Some(Event::Render) => {
                self.render()?;
                None
            }
            Some(Event::Resize(w, h)) => {
                self.tui.resize(Rect::new(0, 0, w, h))?;
                self.render()?;
                Some(RawMsg::Resize(w, h))
            }
            Some(Event::Key(key)) => Some(RawMsg::Key(key)),
            Some(Event::Error(error)) => Some(RawMsg::Error(error)),
        };

        if let Some(raw) = raw {
            for msg in translate_raw_to_domain(raw, &self.config.keybindings) {
                self.runtime.send_msg(msg);
            }
        }
        Ok(())
    }

    /// Draw a frame, then let the pager observe the sentinel it produced
    pub fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let view = project(&state.feed);
        let components = &mut self.components;

        let mut visible = 0..0;
        self.tui.draw(&mut |frame: &mut Frame<'_>| {
            visible = components.render(frame, state, &view);
        })?;

        let dispatcher = self.runtime.dispatcher();
        self.pager
            .sync(view.sentinel(), view.can_load_more, move || {
                dispatcher.dispatch(FeedMsg::ChangePage)
            });
        self.pager.watcher_mut().report(visible);
        Ok(())
    }
}
