//! Core data types for issue-cache-lib.
//!
//! Records arrive as loosely-typed issue payloads (GitHub REST style dumps,
//! hand-written fixtures). They are converted on ingestion into one
//! `IssueRecord` shape; fields the helpers do not interpret are kept verbatim
//! in `extra` so a dump round-trips.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::identifier::coerce_identifier;

/// Normalized issue state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum IssueState {
    #[default]
    Open,
    InProgress,
    Closed,
    Completed,
    Done,
    Resolved,
    Custom(String),
}

impl IssueState {
    /// Parse an already-normalized state string.
    #[must_use]
    pub fn from_normalized(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "in_progress" => Self::InProgress,
            "closed" => Self::Closed,
            "completed" => Self::Completed,
            "done" => Self::Done,
            "resolved" => Self::Resolved,
            other => Self::Custom(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
            Self::Completed => "completed",
            Self::Done => "done",
            Self::Resolved => "resolved",
            Self::Custom(value) => value,
        }
    }

    /// Closed-like states; anything else counts as open.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Closed | Self::Completed | Self::Done | Self::Resolved
        )
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One tracked issue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Canonical issue number.
    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<i64>,

    /// Raw state as ingested (not normalized).
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<String>,

    /// Raw status as ingested; kept in sync with `state` on writes.
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub closed: Option<bool>,

    /// Set when the work behind the issue is done, as opposed to closed
    /// without completion.
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed: Option<bool>,

    /// Every other field, including the identifier aliases.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IssueRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a JSON object into a record.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not an object or a known field has an
    /// unusable type.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    #[must_use]
    pub const fn with_number(mut self, number: i64) -> Self {
        self.number = Some(number);
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub const fn with_closed(mut self, closed: bool) -> Self {
        self.closed = Some(closed);
        self
    }

    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Add an uninterpreted field such as `id` or `title`.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_identifier(&value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid issue number: {value}"))
        }),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(value.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string state, got {other}"
        ))),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .filter(|value| !value.is_null())
        .map(|value| is_truthy(&value)))
}

/// Loose truthiness used for `closed`/`completed` payload flags.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
