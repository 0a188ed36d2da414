//! DeleteTask command

use super::locate_task;
use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::{BoardId, ColumnId, TaskId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Remove a task from its column.
///
/// The remaining tasks keep their `order` values; a gap is left behind until
/// the next move in that column or a repair pass closes it.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTask {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub task_id: TaskId,
}

operation!(DeleteTask, verb = "delete", noun = "task", description = "Delete a task");

impl DeleteTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            task_id: task_id.into(),
        }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for DeleteTask {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let (mut board, ci, ti) =
                locate_task(ctx, &self.board_id, &self.column_id, &self.task_id).await?;
            let removed = board.columns[ci].tasks.remove(ti);
            ctx.write_columns(&board.id, &board.columns, Utc::now()).await?;
            Ok(json!({ "deleted": true, "id": removed.id, "title": removed.title }))
        })
        .await
    }
}
