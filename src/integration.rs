//! Wiring between the pure core and the outside world
//!
//! - `CmdExecutor` carries out the commands `update` emits.
//! - `Runtime` owns the state and schedules message processing in turns.
//! - `AppRunner` drives the terminal, the runtime and the pager.

pub mod app_runner;
pub mod cmd_executor;
pub mod runtime;
