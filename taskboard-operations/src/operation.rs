//! The operation traits

use crate::ExecutionResult;
use async_trait::async_trait;
use serde_json::Value;

/// Metadata every operation carries about itself.
pub trait Operation: Send + Sync {
    /// The action, e.g. "move"
    fn verb(&self) -> &'static str;

    /// The thing acted upon, e.g. "task"
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Canonical op string used in log entries ("move task")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context.
///
/// `C` is whatever the operation needs to reach storage, `E` is the domain
/// error. Implementations never panic on failure; they return
/// [`ExecutionResult::Failed`].
#[async_trait]
pub trait Execute<C, E>: Operation
where
    C: Send + Sync,
    E: Send,
{
    async fn execute(&self, ctx: &C) -> ExecutionResult<Value, E>;
}
