//! `issue_cache` - Offline issue state tracking
//!
//! This crate provides the `icache` CLI on top of `issue-cache-lib`.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration management
//! - [`dump`] - Reading and rendering issue dumps (JSON array or JSONL)
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod format;
pub mod logging;

pub use cli::run;
pub use error::{CacheError, Result};
