//! Message dispatch from asynchronous work back into the runtime

use tokio::sync::mpsc;

use crate::core::msg::Msg;

/// When a dispatched message should be processed
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// In the turn that receives it
    Now(Msg),
    /// At the start of the following turn, to coalesce bursts
    NextTurn(Msg),
}

/// Cloneable handle used by fetch tasks and the pager to send messages.
///
/// Sends after the runtime has gone away are dropped silently.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Dispatch>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Dispatch>) -> Self {
        Self { tx }
    }

    /// A dispatcher and the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Dispatch>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn dispatch(&self, msg: impl Into<Msg>) {
        self.send(Dispatch::Now(msg.into()));
    }

    /// Enqueue for the next scheduling turn
    pub fn defer(&self, msg: impl Into<Msg>) {
        self.send(Dispatch::NextTurn(msg.into()));
    }

    fn send(&self, dispatch: Dispatch) {
        if self.tx.send(dispatch).is_err() {
            log::trace!("dispatch after runtime shutdown discarded");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
