//! Error types for `issue_cache`.

use std::path::PathBuf;

use issue_cache_lib::IssueError;
use thiserror::Error;

/// Primary error type for the `icache` command layer.
#[derive(Error, Debug)]
pub enum CacheError {
    // === Issue Errors ===
    /// Lookup or identifier failure from the issue helpers.
    #[error(transparent)]
    Issue(#[from] IssueError),

    // === Dump Errors ===
    /// Failed to parse the issue dump.
    #[error("Dump parse error at line {line}: {reason}")]
    DumpParse { line: usize, reason: String },

    /// Issue dump or config file not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CacheError {
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}

/// Result type using `CacheError`.
pub type Result<T> = std::result::Result<T, CacheError>;
