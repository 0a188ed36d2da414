//! Activity log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One executed operation, as stored in the activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// ULID, so entries sort by creation time
    pub id: String,

    pub timestamp: DateTime<Utc>,

    /// Canonical op string, e.g. "move task"
    pub op: String,

    /// Operation parameters as JSON
    pub input: Value,

    /// Result value, or `{"error": ...}` for failures
    pub output: Value,

    /// Email of the signed-in user or a free-form actor name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry stamped with the current time
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Entry for a failed operation; the error message becomes the output
    pub fn failure(op: impl Into<String>, input: Value, error: &str, duration_ms: u64) -> Self {
        Self::new(
            op,
            input,
            serde_json::json!({ "error": error }),
            None,
            duration_ms,
        )
    }

    /// Attribute the entry to an actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// True when the output records an error
    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}
