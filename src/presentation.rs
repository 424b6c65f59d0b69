//! Presentation layer
//!
//! Stateless ratatui rendering of a `FeedView`, plus key binding config.

pub mod components;
pub mod config;
pub mod widgets;
