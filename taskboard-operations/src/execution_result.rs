//! Execution result types for operations

use crate::LogEntry;

/// Outcome of executing an operation
///
/// - `Logged`: a mutation that belongs in the activity log
/// - `Unlogged`: a read with no side effects
/// - `Failed`: an error, logged when the operation was a mutation
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Drop the log entry and keep the outcome
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } | Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Separate the outcome from its log entry
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Whether a log entry is attached
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }

    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}
