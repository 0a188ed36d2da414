//! MoveTask command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::execution::{logged, operation};
use crate::types::{Board, BoardId, ColumnId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Move a task to a position in a column, or reorder it within its own column.
///
/// `is_last_column` is trusted as given: when true the moved task gets a
/// fresh `completedDate`. A move into any other column never clears one.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTask {
    pub board_id: BoardId,
    pub source_column_id: ColumnId,
    pub destination_column_id: ColumnId,
    pub task_id: TaskId,
    /// Index in the destination column; past the end appends
    pub new_position: usize,
    #[serde(default)]
    pub is_last_column: bool,
}

operation!(MoveTask, verb = "move", noun = "task", description = "Move a task to a column and position");

impl MoveTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        source_column_id: impl Into<ColumnId>,
        destination_column_id: impl Into<ColumnId>,
        new_position: usize,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            source_column_id: source_column_id.into(),
            destination_column_id: destination_column_id.into(),
            task_id: task_id.into(),
            new_position,
            is_last_column: false,
        }
    }

    /// Reorder a task inside the column it already lives in
    pub fn reorder(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        column_id: impl Into<ColumnId>,
        new_position: usize,
    ) -> Self {
        let column_id = column_id.into();
        Self::new(board_id, task_id, column_id.clone(), column_id, new_position)
    }

    pub fn into_last_column(mut self, is_last: bool) -> Self {
        self.is_last_column = is_last;
        self
    }
}

/// Apply a move to an in-memory board.
///
/// On success the source and destination columns are both contiguous
/// (`order == index`) and the board holds the same number of tasks as before.
/// On error the board is untouched.
pub fn apply_move(board: &mut Board, mv: &MoveTask, now: DateTime<Utc>) -> Result<()> {
    let si = board
        .column_index(&mv.source_column_id)
        .ok_or_else(|| KanbanError::column_not_found(&mv.source_column_id))?;
    let di = board
        .column_index(&mv.destination_column_id)
        .ok_or_else(|| KanbanError::column_not_found(&mv.destination_column_id))?;
    let ti = board.columns[si]
        .tasks
        .iter()
        .position(|t| t.id == mv.task_id)
        .ok_or_else(|| KanbanError::task_not_found(&mv.task_id))?;

    let mut task = board.columns[si].tasks.remove(ti);
    let destination = &mut board.columns[di];
    task.status = destination.name.clone();
    task.updated_at = now;
    if mv.is_last_column {
        task.completed_date = Some(now);
    }

    let at = mv.new_position.min(destination.tasks.len());
    destination.tasks.insert(at, task);
    destination.renumber();
    if si != di {
        board.columns[si].renumber();
    }

    tracing::debug!(
        task = %mv.task_id,
        from = %mv.source_column_id,
        to = %mv.destination_column_id,
        position = at,
        "task moved"
    );
    Ok(())
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for MoveTask {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let mut board = ctx.read_board(&self.board_id).await?;
            let now = Utc::now();
            apply_move(&mut board, self, now)?;
            ctx.write_columns(&board.id, &board.columns, now).await?;
            Ok(Value::Null)
        })
        .await
    }
}
