//! DeleteBoard command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Delete a board and everything on it
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteBoard {
    pub id: BoardId,
}

operation!(DeleteBoard, verb = "delete", noun = "board", description = "Delete a board");

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for DeleteBoard {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let board = ctx.read_board(&self.id).await?;
            ctx.delete_board(&self.id).await?;
            Ok(json!({ "deleted": true, "id": board.id, "tasks": board.task_count() }))
        })
        .await
    }
}
