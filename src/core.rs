//! Core Elm Architecture implementation
//!
//! This module contains the pure parts of the feed viewer:
//! - Messages and raw messages
//! - Feed, UI and system state, including the pagination reducer
//! - Update logic and the commands it emits
//! - The projection consumed by the presentation layer
//! - The visibility-driven pager

pub mod cmd;
pub mod msg;
pub mod pager;
pub mod projection;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
