//! # hnfeed - Hacker News top stories in the terminal
//!
//! An incrementally paginated feed viewer built on an Elm-like architecture:
//! a ranked list of ids is fetched once, item bodies are fetched one page
//! window at a time, and the next page is requested when the end of the list
//! scrolls into view.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, with the pagination
//!   reducer in `core::state::feed`
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure state transitions
//! - **Command** (`core::cmd`): side effects (network, browser, logging)
//! - **View** (`presentation`): ratatui rendering of `core::projection`
//!
//! ## Example Usage
//!
//! ```rust
//! use hnfeed::core::{msg::feed::FeedMsg, state::feed::{reduce, FeedState}};
//! use hnfeed::domain::item::ItemId;
//!
//! let state = FeedState::new(25);
//! let state = reduce(state, FeedMsg::ItemListLoaded((1..=30).map(ItemId).collect()));
//!
//! assert_eq!(state.page_window().len(), 25);
//! assert_eq!(state.expected_visible_count(), 25);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub type Result<T> = color_eyre::eyre::Result<T>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
