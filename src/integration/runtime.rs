use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        msg::Msg,
        state::AppState,
        update::{init, update},
    },
    infrastructure::dispatcher::{Dispatch, Dispatcher},
    integration::cmd_executor::CmdExecutor,
};

/// Owns the application state and processes messages in turns.
///
/// A turn first handles whatever was deferred during the previous turn, then
/// everything queued or dispatched "now" (including messages dispatched by
/// the commands it executes). Deferred dispatches received during a turn wait
/// for the next one.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    deferred: VecDeque<Msg>,
    dispatcher: Dispatcher,
    dispatch_rx: mpsc::UnboundedReceiver<Dispatch>,
    cmd_executor: Option<CmdExecutor>,
    turns: u64,
}

impl Runtime {
    /// Create a new Runtime without a command executor
    pub fn new(initial_state: AppState) -> Self {
        let (dispatcher, dispatch_rx) = Dispatcher::channel();
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            deferred: VecDeque::new(),
            dispatcher,
            dispatch_rx,
            cmd_executor: None,
            turns: 0,
        }
    }

    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
    }

    /// Handle for async work to send messages back
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a message for the current turn
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Run the session's initial commands
    pub fn start(&mut self) -> Vec<Cmd> {
        let commands = init();
        self.execute(&commands);
        commands
    }

    /// Whether a turn has work without waiting for a new event
    pub fn has_pending(&self) -> bool {
        !self.msg_queue.is_empty() || !self.deferred.is_empty()
    }

    /// Wait for the next dispatch and queue it; used to wake the app loop
    pub async fn wait_for_dispatch(&mut self) {
        if let Some(dispatch) = self.dispatch_rx.recv().await {
            self.route(dispatch);
        }
    }

    /// Process one turn and return every command emitted during it
    pub fn process_turn(&mut self) -> Vec<Cmd> {
        self.turns += 1;

        let mut queue = std::mem::take(&mut self.deferred);
        queue.append(&mut self.msg_queue);
        self.msg_queue = queue;

        let mut all_commands = Vec::new();
        loop {
            self.drain_dispatches();
            let Some(msg) = self.msg_queue.pop_front() else {
                break;
            };
            let commands = self.process_message(msg);
            self.execute(&commands);
            all_commands.extend(commands);
        }
        all_commands
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("turn {}: {msg:?}", self.turns);
        }
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        commands
    }

    fn drain_dispatches(&mut self) {
        while let Ok(dispatch) = self.dispatch_rx.try_recv() {
            self.route(dispatch);
        }
    }

    fn route(&mut self, dispatch: Dispatch) {
        match dispatch {
            Dispatch::Now(msg) => self.msg_queue.push_back(msg),
            Dispatch::NextTurn(msg) => self.deferred.push_back(msg),
        }
    }

    fn execute(&self, commands: &[Cmd]) {
        let Some(executor) = &self.cmd_executor else {
            return;
        };
        if let Err(err) = executor.execute_commands(commands, &self.state) {
            log::error!("Command execution failed: {err}");
        }
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            turns: self.turns,
            queued_messages: self.msg_queue.len(),
            deferred_messages: self.deferred.len(),
            list_len: self.state.feed.list_len(),
            merged_items: self.state.feed.merged_count(),
            page: self.state.feed.page,
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeStats {
    pub turns: u64,
    pub queued_messages: usize,
    pub deferred_messages: usize,
    pub list_len: Option<usize>,
    pub merged_items: usize,
    pub page: usize,
    pub has_executor: bool,
}
