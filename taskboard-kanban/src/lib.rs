//! Kanban board engine over a JSON document store
//!
//! Boards are single documents: a board holds its columns and each column
//! holds its tasks in display order. Every task mutation is a whole-board
//! read-modify-write that writes back `columns` and `updatedAt` and nothing
//! else. There is no locking; concurrent writers race and the last one wins.
//!
//! ## Overview
//!
//! - **Commands** - each operation is a struct implementing [`Execute`]
//!   against a [`KanbanContext`], grouped by noun (`board`, `task`, `user`,
//!   `tag`, `repair`)
//! - **Ordering** - after any move both affected columns satisfy
//!   `order == index`
//! - **Repair** - [`repair::DiagnoseDuplicates`] reports task ids repeated
//!   within a column and [`repair::FixDuplicates`] renames them
//! - **Activity** - running commands through a [`KanbanOperationProcessor`]
//!   appends an entry per mutation to the `activity` collection
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard_kanban::{
//!     board::CreateBoard, task::{AddTask, MoveTask}, Execute, KanbanContext, Session,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = KanbanContext::in_memory().with_session(Session::new("ada@example.com"));
//!
//! let board = CreateBoard::new("Roadmap")
//!     .with_default_columns()
//!     .execute(&ctx)
//!     .await
//!     .into_result()?;
//! let board_id = board["id"].as_str().unwrap_or_default();
//! let todo = board["columns"][0]["id"].as_str().unwrap_or_default();
//! let done = board["columns"][2]["id"].as_str().unwrap_or_default();
//!
//! let task = AddTask::new(board_id, todo, "Ship it")
//!     .execute(&ctx)
//!     .await
//!     .into_result()?;
//!
//! MoveTask::new(board_id, task["id"].as_str().unwrap_or_default(), todo, done, 0)
//!     .into_last_column(true)
//!     .execute(&ctx)
//!     .await
//!     .into_result()?;
//! # Ok(())
//! # }
//! ```

mod context;
pub mod drop;
mod error;
mod execution;
pub mod id_gen;
mod processor;
mod session;
pub mod state;
pub mod store;
pub mod types;

// Command modules
pub mod board;
pub mod populate;
pub mod repair;
pub mod tag;
pub mod task;
pub mod user;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{
    async_trait, Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};

pub use context::KanbanContext;
pub use error::{KanbanError, Result};
pub use processor::KanbanOperationProcessor;
pub use session::Session;
pub use store::{Collection, DocumentStore, FileStore, MemoryStore, StoreError};

// Re-export commonly used types
pub use types::{
    Board, BoardId, ChecklistItem, ChecklistItemId, Column, ColumnId, Tag, TagId, Task, TaskId,
    User, UserId,
};
