use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::{
    core::{cmd::Cmd, msg::system::SystemMsg, state::AppState},
    infrastructure::{dispatcher::Dispatcher, orchestrator::FetchOrchestrator},
};

/// Carries out commands emitted by `update`.
///
/// Fetches are handed to the orchestrator, which spawns them and reports back
/// through the dispatcher; nothing here blocks the turn.
#[derive(Clone)]
pub struct CmdExecutor {
    orchestrator: Arc<FetchOrchestrator>,
    dispatcher: Dispatcher,
}

impl CmdExecutor {
    pub fn new(orchestrator: Arc<FetchOrchestrator>, dispatcher: Dispatcher) -> Self {
        Self {
            orchestrator,
            dispatcher,
        }
    }

    /// Execute a single command against the state it was emitted from
    pub fn execute_command(&self, cmd: &Cmd, state: &AppState) -> Result<()> {
        match cmd {
            Cmd::FetchItemList => {
                self.orchestrator.spawn_item_list();
            }

            Cmd::FetchPageWindow => {
                self.orchestrator.fetch_page_window(&state.feed);
            }

            Cmd::OpenUrl { url } => {
                log::info!("Opening {url}");
                if let Err(err) = open::that_detached(url) {
                    self.dispatcher.dispatch(SystemMsg::ShowError(format!(
                        "Unable to open {url}: {err}"
                    )));
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }
        }
        Ok(())
    }

    /// Execute several commands in order, stopping at the first failure
    pub fn execute_commands(&self, commands: &[Cmd], state: &AppState) -> Result<()> {
        for cmd in commands {
            self.execute_command(cmd, state)?;
        }
        Ok(())
    }
}
