//! Text formatting functions for `issue_cache`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - State icons (○ ◐ ✓ ?)
//! - Issue line formatting

use issue_cache_lib::{IssueRecord, IssueState, state_of};

/// State icon characters.
pub mod icons {
    /// Open issue - still to do (hollow circle).
    pub const OPEN: &str = "○";
    /// In progress - active work (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Closed, completed, done or resolved (checkmark).
    pub const CLOSED: &str = "✓";
    /// Any other state.
    pub const UNKNOWN: &str = "?";
}

/// Return the icon character for a state.
#[must_use]
pub const fn format_state_icon(state: &IssueState) -> &'static str {
    match state {
        IssueState::Open => icons::OPEN,
        IssueState::InProgress => icons::IN_PROGRESS,
        IssueState::Closed | IssueState::Completed | IssueState::Done | IssueState::Resolved => {
            icons::CLOSED
        }
        IssueState::Custom(_) => icons::UNKNOWN,
    }
}

/// Format the issue number as `#N`, or `#?` when it has none.
#[must_use]
pub fn format_number(issue: &IssueRecord) -> String {
    issue
        .number
        .map_or_else(|| "#?".to_string(), |n| format!("#{n}"))
}

/// Format a single-line issue summary.
///
/// Format: `{icon} #{number} [{state}] {title}`
#[must_use]
pub fn format_issue_line(issue: &IssueRecord) -> String {
    let state = state_of(issue);
    let mut line = format!(
        "{} {} [{}] {}",
        format_state_icon(&state),
        format_number(issue),
        state,
        issue.title().unwrap_or("(untitled)"),
    );
    if issue.is_completed() {
        line.push_str(" (completed)");
    }
    line
}

/// Format a list of numbers as `#1, #2`.
#[must_use]
pub fn format_number_list(issues: &[IssueRecord]) -> String {
    issues
        .iter()
        .map(format_number)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_issue() -> IssueRecord {
        IssueRecord::new()
            .with_number(7)
            .with_state("open")
            .with_field("title", "Test title")
    }

    #[test]
    fn test_state_icons() {
        assert_eq!(format_state_icon(&IssueState::Open), "○");
        assert_eq!(format_state_icon(&IssueState::InProgress), "◐");
        assert_eq!(format_state_icon(&IssueState::Closed), "✓");
        assert_eq!(format_state_icon(&IssueState::Resolved), "✓");
        assert_eq!(
            format_state_icon(&IssueState::Custom("triage".to_string())),
            "?"
        );
    }

    #[test]
    fn test_format_issue_line_open() {
        let issue = make_test_issue();
        assert_eq!(format_issue_line(&issue), "○ #7 [open] Test title");
    }

    #[test]
    fn test_format_issue_line_normalizes_state() {
        let issue = make_test_issue().with_state(" In_Progress ");
        assert_eq!(format_issue_line(&issue), "◐ #7 [in_progress] Test title");
    }

    #[test]
    fn test_format_issue_line_completed() {
        let issue = make_test_issue().with_state("closed").with_completed(true);
        assert_eq!(format_issue_line(&issue), "✓ #7 [closed] Test title (completed)");
    }

    #[test]
    fn test_format_issue_line_without_number_or_title() {
        let issue = IssueRecord::new().with_closed(false);
        assert_eq!(format_issue_line(&issue), "○ #? [open] (untitled)");
    }

    #[test]
    fn test_format_number_list() {
        let issues = vec![
            IssueRecord::new().with_number(2),
            IssueRecord::new().with_number(4),
        ];
        assert_eq!(format_number_list(&issues), "#2, #4");
        assert_eq!(format_number_list(&[]), "");
    }
}
