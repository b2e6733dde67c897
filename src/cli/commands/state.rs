//! State command implementation.

use issue_cache_lib::{IssueRecord, find_issue_index, get_state, is_open};
use serde::Serialize;

use crate::cli::StateArgs;
use crate::error::Result;
use crate::format::OutputContext;

#[derive(Serialize)]
struct StateOutput<'a> {
    number: i64,
    state: &'a str,
    open: bool,
    completed: bool,
}

/// Execute the state command.
///
/// # Errors
///
/// Returns `IssueNotFound` if no record carries the number.
pub fn execute(args: &StateArgs, issues: &mut [IssueRecord], ctx: &OutputContext) -> Result<()> {
    let index = find_issue_index(issues, args.number)?;
    let issue = &issues[index];
    let state = get_state(issue);

    if ctx.json {
        let output = StateOutput {
            number: args.number,
            state: &state,
            open: is_open(issue),
            completed: issue.is_completed(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{state}");
    }

    Ok(())
}
