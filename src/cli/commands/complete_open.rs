//! Complete-open command implementation.

use issue_cache_lib::{IssueRecord, complete_open_issues};

use crate::cli::CompleteOpenArgs;
use crate::error::Result;
use crate::format::{OutputContext, format_number_list};

/// Execute the complete-open command.
///
/// With no numbers every open issue is completed.
///
/// # Errors
///
/// Returns an error if a record has no usable identifier or output fails.
pub fn execute(
    args: &CompleteOpenArgs,
    issues: &mut [IssueRecord],
    ctx: &OutputContext,
) -> Result<()> {
    let restrict = (!args.numbers.is_empty()).then_some(args.numbers.as_slice());
    let completed = complete_open_issues(issues, restrict)?;
    ctx.summary(&complete_open_summary(&completed));
    ctx.emit_collection(issues)
}

fn complete_open_summary(completed: &[IssueRecord]) -> String {
    if completed.is_empty() {
        "No open issues to complete".to_string()
    } else {
        format!(
            "Completed {} issue(s): {}",
            completed.len(),
            format_number_list(completed)
        )
    }
}
