//! Open/closed state access.
//!
//! `state` wins over `status`. When neither carries a value the boolean
//! `closed`/`completed` flags decide, and a record with nothing at all is
//! open.

use crate::model::{IssueRecord, IssueState};

/// Normalize a raw state value. A missing value means `"open"`.
#[must_use]
pub fn normalize_state(value: Option<&str>) -> String {
    value.map_or_else(|| "open".to_string(), |v| v.trim().to_lowercase())
}

/// Read the normalized state of a record.
#[must_use]
pub fn get_state(record: &IssueRecord) -> String {
    // An empty `state` defers to `status`.
    let raw = record
        .state
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(record.status.as_deref());

    match raw {
        Some(value) => normalize_state(Some(value)),
        None if record.closed.unwrap_or(false) || record.is_completed() => "closed".to_string(),
        None => "open".to_string(),
    }
}

/// Typed view of [`get_state`].
#[must_use]
pub fn state_of(record: &IssueRecord) -> IssueState {
    IssueState::from_normalized(&get_state(record))
}

/// Write `state` to both `state` and `status` and keep `closed` consistent.
pub fn set_state(record: &mut IssueRecord, state: &str) {
    let normalized = normalize_state(Some(state));
    record.closed = Some(normalized == "closed");
    record.status = Some(normalized.clone());
    record.state = Some(normalized);
}

/// True unless the record is closed, completed, done or resolved.
#[must_use]
pub fn is_open(record: &IssueRecord) -> bool {
    !state_of(record).is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> IssueRecord {
        IssueRecord::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_state() {
        assert_eq!(normalize_state(None), "open");
        assert_eq!(normalize_state(Some("  In_Progress \t")), "in_progress");
        assert_eq!(normalize_state(Some("CLOSED")), "closed");
    }

    #[test]
    fn test_state_wins_over_status() {
        let issue = record(json!({"state": "Closed", "status": "open"}));
        assert_eq!(get_state(&issue), "closed");
    }

    #[test]
    fn test_status_used_when_state_absent_or_empty() {
        assert_eq!(get_state(&record(json!({"status": " Done "}))), "done");
        assert_eq!(
            get_state(&record(json!({"state": "", "status": "resolved"}))),
            "resolved"
        );
    }

    #[test]
    fn test_flags_infer_closed() {
        assert_eq!(get_state(&record(json!({"closed": true}))), "closed");
        assert_eq!(get_state(&record(json!({"completed": true}))), "closed");
        assert_eq!(get_state(&record(json!({"closed": false}))), "open");
        assert_eq!(get_state(&record(json!({}))), "open");
    }

    #[test]
    fn test_explicit_state_beats_flags() {
        let issue = record(json!({"state": "open", "closed": true}));
        assert_eq!(get_state(&issue), "open");
        assert!(is_open(&issue));
    }

    #[test]
    fn test_is_open_classification() {
        for closed in ["closed", "completed", "DONE", " resolved "] {
            assert!(!is_open(&record(json!({"state": closed}))), "{closed}");
        }
        for open in ["open", "in_progress", "blocked", "wontfix"] {
            assert!(is_open(&record(json!({"status": open}))), "{open}");
        }
    }

    #[test]
    fn test_set_state_syncs_fields() {
        let mut issue = record(json!({"number": 2, "status": "open"}));
        set_state(&mut issue, " Closed ");
        assert_eq!(issue.state.as_deref(), Some("closed"));
        assert_eq!(issue.status.as_deref(), Some("closed"));
        assert_eq!(issue.closed, Some(true));

        set_state(&mut issue, "done");
        assert_eq!(issue.closed, Some(false));
        assert!(!is_open(&issue));
    }

    proptest! {
        #[test]
        fn prop_set_state_then_get_state(s in "\\PC{0,16}") {
            let mut issue = IssueRecord::new().with_number(1);
            set_state(&mut issue, &s);
            let expected = normalize_state(Some(&s));
            prop_assert_eq!(get_state(&issue), expected.clone());
            prop_assert_eq!(issue.closed, Some(expected == "closed"));
            prop_assert_eq!(issue.state, issue.status);
        }

        #[test]
        fn prop_set_state_overrides_flags(
            s in prop::sample::select(vec!["open", "closed", "Done", "in_progress"]),
            closed in any::<bool>(),
            completed in any::<bool>(),
        ) {
            let mut issue = IssueRecord::new()
                .with_number(1)
                .with_closed(closed)
                .with_completed(completed);
            set_state(&mut issue, s);
            prop_assert_eq!(get_state(&issue), normalize_state(Some(s)));
        }
    }
}
