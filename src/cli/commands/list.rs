//! List command implementation.
//!
//! Primary discovery interface: shows the issues that are still open.

use issue_cache_lib::{IssueRecord, list_open_issues};

use crate::dump::render_dump;
use crate::error::Result;
use crate::format::{OutputContext, format_issue_line};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(issues: &[IssueRecord], ctx: &OutputContext) -> Result<()> {
    let open = list_open_issues(issues);

    if ctx.json {
        println!("{}", render_dump(&open, ctx.pretty)?);
    } else if open.is_empty() {
        println!("No open issues.");
    } else {
        for issue in &open {
            println!("{}", format_issue_line(issue));
        }
        println!("\n{} open issue(s)", open.len());
    }

    Ok(())
}
