//! Task commands
//!
//! Tasks live inside their board document, so every task command is a
//! read-modify-write of the board's `columns` array.

mod add;
mod checklist;
mod delete;
mod mv;
mod update;

pub use add::AddTask;
pub use checklist::{AddChecklistItem, RemoveChecklistItem, ToggleChecklistItem};
pub use delete::DeleteTask;
pub use mv::{apply_move, MoveTask};
pub use update::UpdateTask;

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::types::{Board, BoardId, ColumnId, Task, TaskId};
use chrono::Utc;

/// Read a board and locate a task in one of its columns, returning the
/// board with the column and task indices.
pub(crate) async fn locate_task(
    ctx: &KanbanContext,
    board_id: &BoardId,
    column_id: &ColumnId,
    task_id: &TaskId,
) -> Result<(Board, usize, usize)> {
    let board = ctx.read_board(board_id).await?;
    let column_index = board
        .column_index(column_id)
        .ok_or_else(|| KanbanError::column_not_found(column_id))?;
    let task_index = board.columns[column_index]
        .tasks
        .iter()
        .position(|t| &t.id == task_id)
        .ok_or_else(|| KanbanError::task_not_found(task_id))?;
    Ok((board, column_index, task_index))
}

/// Stamp a task as touched by the signed-in user, keeping the previous
/// `updatedBy` when nobody is signed in
pub(crate) fn touch(task: &mut Task, ctx: &KanbanContext) {
    task.updated_at = Utc::now();
    if let Some(email) = ctx.session_email() {
        task.updated_by = Some(email);
    }
}
