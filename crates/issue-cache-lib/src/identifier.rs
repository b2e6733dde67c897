//! Identifier resolution for issue records.
//!
//! Dumps from different sources name the issue number differently. The
//! recognized fields are tried in a fixed priority order and the first one
//! present wins.

use serde_json::Value;

use crate::error::{IssueError, Result};
use crate::model::IssueRecord;

/// Identifier fields in priority order.
pub const IDENTIFIER_FIELDS: [&str; 4] = ["number", "id", "issue_id", "issueNumber"];

/// A resolved identifier and the field it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier {
    pub field: &'static str,
    pub number: i64,
}

/// Coerce a payload value into an issue number.
///
/// Integers pass through, floats truncate toward zero, strings are trimmed
/// and parsed as base-10, booleans map to 0/1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn coerce_identifier(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            if !n.is_f64() {
                // u64 beyond i64::MAX
                return None;
            }
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Resolve the record's identifier, reporting which field supplied it.
///
/// # Errors
///
/// Returns `MissingIdentifier` if no recognized field is present, or
/// `InvalidIdentifier` if the winning field is not an integer.
pub fn identify(record: &IssueRecord) -> Result<Identifier> {
    if let Some(number) = record.number {
        return Ok(Identifier {
            field: IDENTIFIER_FIELDS[0],
            number,
        });
    }

    for &field in &IDENTIFIER_FIELDS[1..] {
        let value = match record.extra.get(field) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };
        return coerce_identifier(value)
            .map(|number| Identifier { field, number })
            .ok_or_else(|| IssueError::InvalidIdentifier {
                field: field.to_string(),
                value: value.to_string(),
            });
    }

    Err(IssueError::MissingIdentifier)
}

/// Resolve the record's issue number.
///
/// # Errors
///
/// See [`identify`].
pub fn resolve_identifier(record: &IssueRecord) -> Result<i64> {
    identify(record).map(|id| id.number)
}

/// Resolve the issue number and write it back to `number` if absent.
///
/// # Errors
///
/// See [`identify`]. The record is left untouched on error.
pub fn ensure_canonical_number(record: &mut IssueRecord) -> Result<i64> {
    let id = identify(record)?;
    if record.number.is_none() {
        tracing::trace!(field = id.field, number = id.number, "Canonicalized issue number");
        record.number = Some(id.number);
    }
    Ok(id.number)
}
