//! Processor trait: the one place operations are run and logged

use crate::{Execute, LogEntry};
use async_trait::async_trait;
use serde_json::Value;

/// Runs operations and records their log entries.
///
/// A processor owns the cross-cutting concerns (actor attribution, where log
/// entries go, tracing) so that individual operations only compute.
#[async_trait]
pub trait OperationProcessor<C, E>: Send + Sync
where
    C: Send + Sync,
    E: Send,
{
    /// Execute the operation, persist its log entry if any, and return the value.
    async fn process<O>(&self, operation: &O, ctx: &C) -> Result<Value, E>
    where
        O: Execute<C, E> + Send + Sync;

    /// Persist a single log entry produced by an operation.
    async fn write_log(&self, ctx: &C, entry: LogEntry) -> Result<(), E>;
}
