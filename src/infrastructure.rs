//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - The remote feed API and its error classification
//! - Fetch orchestration and message dispatch
//! - Terminal foundation and viewport visibility
//! - CLI argument processing and configuration

pub mod api;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod orchestrator;
pub mod tui;
pub mod viewport;
