//! Error types for `issue-cache-lib`.

use thiserror::Error;

/// Primary error type for issue helper operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueError {
    /// No record in the collection carries the requested number.
    #[error("Issue #{number} not found")]
    IssueNotFound { number: i64 },

    /// Record has none of the recognized identifier fields.
    #[error("Issue identifier not found in payload")]
    MissingIdentifier,

    /// Identifier field is present but cannot be read as an integer.
    #[error("Invalid issue identifier in '{field}': {value}")]
    InvalidIdentifier { field: String, value: String },
}

impl IssueError {
    /// True for the lookup failures the bulk operations tolerate.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::IssueNotFound { .. })
    }
}

/// Result type using `IssueError`.
pub type Result<T> = std::result::Result<T, IssueError>;
