//! `issue-cache-lib` — In-process helpers for a local issue dump.
//!
//! Tracks the open/closed state of issue records owned by the caller. All
//! operations work on a mutable slice and keep no state between calls.
//!
//! # Quick Start
//!
//! ```
//! use issue_cache_lib::{IssueRecord, close_issue, list_open_issues};
//!
//! let mut issues = vec![
//!     IssueRecord::new().with_number(1).with_state("closed"),
//!     IssueRecord::new().with_number(2).with_state("open"),
//!     IssueRecord::new().with_field("id", 4),
//! ];
//!
//! let open = list_open_issues(&issues);
//! assert_eq!(open.len(), 2);
//!
//! let closed = close_issue(&mut issues, 2).unwrap();
//! assert_eq!(closed.closed, Some(true));
//! ```

pub mod error;
pub mod identifier;
pub mod model;
pub mod state;
pub mod tracker;

pub use error::{IssueError, Result};
pub use identifier::{
    IDENTIFIER_FIELDS, Identifier, coerce_identifier, ensure_canonical_number, identify,
    resolve_identifier,
};
pub use model::{IssueRecord, IssueState};
pub use state::{get_state, is_open, normalize_state, set_state, state_of};
pub use tracker::{
    close_implemented_issues, close_issue, complete_issue, complete_open_issues,
    find_issue_index, list_open_issues,
};
