//! Close command implementation.

use issue_cache_lib::{IssueRecord, close_implemented_issues};

use crate::cli::CloseArgs;
use crate::error::Result;
use crate::format::{OutputContext, format_number_list};

/// Execute the close command.
///
/// Unknown numbers are skipped so the same list of implemented issues can
/// be applied repeatedly.
///
/// # Errors
///
/// Returns an error if a record has no usable identifier or output fails.
pub fn execute(args: &CloseArgs, issues: &mut [IssueRecord], ctx: &OutputContext) -> Result<()> {
    let closed = close_implemented_issues(issues, args.numbers.iter().copied())?;
    ctx.summary(&close_summary(args.numbers.len(), &closed));
    ctx.emit_collection(issues)
}

fn close_summary(requested: usize, closed: &[IssueRecord]) -> String {
    let skipped = requested.saturating_sub(closed.len());
    let mut summary = format!("Closed {} issue(s)", closed.len());
    if !closed.is_empty() {
        summary.push_str(&format!(": {}", format_number_list(closed)));
    }
    if skipped > 0 {
        summary.push_str(&format!(" ({skipped} unknown skipped)"));
    }
    summary
}
