//! Output formatting for `issue_cache`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! Mutating commands always print the updated dump as JSON on stdout and
//! send their human summary to stderr, so stdout can be redirected into a
//! new dump file.

mod text;

use issue_cache_lib::IssueRecord;

use crate::dump::render_dump;
use crate::error::Result;

pub use text::{
    format_issue_line, format_number, format_number_list, format_state_icon, icons,
};

/// Output settings shared by all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputContext {
    pub json: bool,
    pub quiet: bool,
    pub pretty: bool,
}

impl OutputContext {
    /// Print a human summary to stderr unless quiet.
    pub fn summary(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print the full issue collection as a JSON dump on stdout.
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails.
    pub fn emit_collection(&self, issues: &[IssueRecord]) -> Result<()> {
        println!("{}", render_dump(issues, self.pretty)?);
        Ok(())
    }
}
