//! # Taskboard Operations
//!
//! Every board command is a struct whose fields are its parameters. The struct
//! names itself through [`Operation`] and does its work through [`Execute`],
//! returning an [`ExecutionResult`] that tells the caller whether the outcome
//! belongs in the activity log.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct DeleteTag {
//!     pub id: TagId,
//! }
//!
//! impl Operation for DeleteTag {
//!     fn verb(&self) -> &'static str { "delete" }
//!     fn noun(&self) -> &'static str { "tag" }
//!     fn description(&self) -> &'static str { "Delete a tag" }
//! }
//!
//! #[async_trait]
//! impl Execute<KanbanContext, KanbanError> for DeleteTag {
//!     async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
//!         // returns ExecutionResult::Logged, Unlogged or Failed
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use async_trait::async_trait;
pub use serde_json::Value;
