//! Shared plumbing for turning a command's work into an `ExecutionResult`

use crate::error::{KanbanError, Result};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::time::Instant;
use taskboard_operations::{ExecutionResult, LogEntry, Operation};

/// Implement [`Operation`] for a command struct
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl taskboard_operations::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}
pub(crate) use operation;

/// Run a mutation. Success and failure both carry a log entry.
pub(crate) async fn logged<O, F>(op: &O, work: F) -> ExecutionResult<Value, KanbanError>
where
    O: Operation + Serialize,
    F: Future<Output = Result<Value>>,
{
    let start = Instant::now();
    let input = serde_json::to_value(op).unwrap_or(Value::Null);
    let result = work.await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(value) => {
            tracing::info!(op = %op.op_string(), duration_ms, "operation completed");
            ExecutionResult::Logged {
                log_entry: LogEntry::new(op.op_string(), input, value.clone(), None, duration_ms),
                value,
            }
        }
        Err(error) => {
            tracing::error!(op = %op.op_string(), %error, "operation failed");
            ExecutionResult::Failed {
                log_entry: Some(LogEntry::failure(
                    op.op_string(),
                    input,
                    &error.to_string(),
                    duration_ms,
                )),
                error,
            }
        }
    }
}

/// Run a read. Nothing is logged to the activity log.
pub(crate) async fn unlogged<O, F>(op: &O, work: F) -> ExecutionResult<Value, KanbanError>
where
    O: Operation,
    F: Future<Output = Result<Value>>,
{
    match work.await {
        Ok(value) => ExecutionResult::Unlogged { value },
        Err(error) => {
            tracing::warn!(op = %op.op_string(), %error, "read failed");
            ExecutionResult::Failed {
                error,
                log_entry: None,
            }
        }
    }
}
