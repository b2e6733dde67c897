//! Complete command implementation.

use issue_cache_lib::{IssueRecord, complete_issue};

use crate::cli::CompleteArgs;
use crate::error::Result;
use crate::format::OutputContext;

/// Execute the complete command.
///
/// # Errors
///
/// Returns `IssueNotFound` if no record carries the number.
pub fn execute(
    args: &CompleteArgs,
    issues: &mut [IssueRecord],
    ctx: &OutputContext,
) -> Result<()> {
    complete_issue(issues, args.number)?;
    ctx.summary(&format!("Completed issue #{}", args.number));
    ctx.emit_collection(issues)
}
