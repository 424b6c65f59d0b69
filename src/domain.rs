//! Domain layer
//!
//! Plain data and helpers that know nothing about I/O:
//! - Feed items and their identifiers
//! - Date formatting for display
//! - Text shaping for narrow terminals

pub mod date;
pub mod item;
pub mod text;
