//! Core types for the kanban engine

mod board;
mod ids;
mod task;
mod user;

pub use board::{Board, Column};
pub use ids::{BoardId, ChecklistItemId, ColumnId, TagId, TaskId, UserId};
pub use task::{ChecklistItem, Task};
pub use user::{Tag, User};
