//! Lookup and state transitions over a caller-owned issue collection.
//!
//! Every function takes the collection as a slice: records are mutated in
//! place but never added, removed or reordered.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{IssueError, Result};
use crate::identifier::ensure_canonical_number;
use crate::model::IssueRecord;
use crate::state::{is_open, set_state};

/// Return copies of the open issues, in collection order.
///
/// Each copy gets its canonical `number` filled in when an identifier can be
/// resolved; records without one are returned as-is. The source collection
/// is never touched.
#[must_use]
pub fn list_open_issues(issues: &[IssueRecord]) -> Vec<IssueRecord> {
    issues
        .iter()
        .filter(|issue| is_open(issue))
        .map(|issue| {
            let mut copy = issue.clone();
            if let Err(err) = ensure_canonical_number(&mut copy) {
                trace!(%err, "Listing open issue without a number");
            }
            copy
        })
        .collect()
}

/// Find the position of issue `number`.
///
/// Records visited by the scan get their canonical `number` written back.
///
/// # Errors
///
/// Returns `IssueNotFound` if no record matches, or the identifier error of
/// the first visited record that has no usable identifier.
pub fn find_issue_index(issues: &mut [IssueRecord], number: i64) -> Result<usize> {
    for (index, issue) in issues.iter_mut().enumerate() {
        if ensure_canonical_number(issue)? == number {
            return Ok(index);
        }
    }
    Err(IssueError::IssueNotFound { number })
}

/// Close issue `number` and return the record, mutated in place.
///
/// # Errors
///
/// Same as [`find_issue_index`].
pub fn close_issue(issues: &mut [IssueRecord], number: i64) -> Result<&mut IssueRecord> {
    let index = find_issue_index(issues, number)?;
    let issue = &mut issues[index];
    mark_closed(issue)?;
    Ok(issue)
}

/// Close issue `number` and flag it as completed.
///
/// # Errors
///
/// Same as [`find_issue_index`].
pub fn complete_issue(issues: &mut [IssueRecord], number: i64) -> Result<&mut IssueRecord> {
    let issue = close_issue(issues, number)?;
    issue.completed = Some(true);
    debug!(number, "Completed issue");
    Ok(issue)
}

/// Close every issue in `numbers`, skipping numbers that match nothing.
///
/// Returns snapshots of the closed records in the order processed.
///
/// # Errors
///
/// Only identifier errors propagate; unknown numbers are ignored. Records
/// closed before the error stay closed.
pub fn close_implemented_issues<I>(
    issues: &mut [IssueRecord],
    numbers: I,
) -> Result<Vec<IssueRecord>>
where
    I: IntoIterator<Item = i64>,
{
    let mut closed = Vec::new();
    for number in numbers {
        match close_issue(issues, number) {
            Ok(issue) => closed.push(issue.clone()),
            Err(err) if err.is_not_found() => debug!(number, "Skipping unknown issue"),
            Err(err) => return Err(err),
        }
    }
    Ok(closed)
}

/// Complete the open issues, optionally restricted to `numbers`.
///
/// Returns snapshots of the completed records in collection order. Records
/// that are already closed are left untouched.
///
/// # Errors
///
/// Returns the identifier error of the first record that has no usable
/// identifier. Records completed before it stay completed.
pub fn complete_open_issues(
    issues: &mut [IssueRecord],
    numbers: Option<&[i64]>,
) -> Result<Vec<IssueRecord>> {
    let targets: Option<HashSet<i64>> = numbers.map(|n| n.iter().copied().collect());

    let mut completed = Vec::new();
    for issue in issues.iter_mut() {
        let number = ensure_canonical_number(issue)?;
        if targets.as_ref().is_some_and(|t| !t.contains(&number)) {
            continue;
        }
        if is_open(issue) {
            mark_closed(issue)?;
            issue.completed = Some(true);
            debug!(number, "Completed issue");
            completed.push(issue.clone());
        }
    }
    Ok(completed)
}

fn mark_closed(issue: &mut IssueRecord) -> Result<()> {
    let number = ensure_canonical_number(issue)?;
    set_state(issue, "closed");
    debug!(number, "Closed issue");
    Ok(())
}
