//! KanbanOperationProcessor - runs commands and writes the activity log

use crate::context::KanbanContext;
use crate::error::KanbanError;
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, LogEntry, OperationProcessor};

/// Runs operations against a [`KanbanContext`], attributing logged entries to
/// an actor and appending them to the `activity` collection.
///
/// The actor defaults to the session email when none is configured.
#[derive(Debug, Clone, Default)]
pub struct KanbanOperationProcessor {
    actor: Option<String>,
}

impl KanbanOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute every logged entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

#[async_trait]
impl OperationProcessor<KanbanContext, KanbanError> for KanbanOperationProcessor {
    async fn process<O>(&self, operation: &O, ctx: &KanbanContext) -> Result<Value, KanbanError>
    where
        O: Execute<KanbanContext, KanbanError> + Send + Sync,
    {
        tracing::debug!(op = %operation.op_string(), "processing operation");
        let (result, log_entry) = operation.execute(ctx).await.split();

        if let Some(mut entry) = log_entry {
            entry.actor = self.actor.clone().or_else(|| ctx.session_email());
            // A failed log write must not mask the operation's own outcome
            if let Err(e) = self.write_log(ctx, entry).await {
                tracing::warn!(op = %operation.op_string(), error = %e, "failed to write activity entry");
            }
        }

        result
    }

    async fn write_log(&self, ctx: &KanbanContext, entry: LogEntry) -> Result<(), KanbanError> {
        ctx.append_activity(&entry).await
    }
}
