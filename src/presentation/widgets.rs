//! Reusable row widgets for the feed list

pub mod placeholder;
pub mod story;

/// Lines taken by one feed row (title, meta, spacer)
pub const ROW_HEIGHT: u16 = 3;

/// Width of the "NNN. " rank column
pub const RANK_WIDTH: usize = 5;
