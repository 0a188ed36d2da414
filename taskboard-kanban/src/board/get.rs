//! GetBoard command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{operation, unlogged};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Read a whole board document
#[derive(Debug, Deserialize, Serialize)]
pub struct GetBoard {
    pub id: BoardId,
}

operation!(GetBoard, verb = "get", noun = "board", description = "Get a board with its columns and tasks");

impl GetBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for GetBoard {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        unlogged(self, async {
            let board = ctx.read_board(&self.id).await?;
            Ok(serde_json::to_value(&board)?)
        })
        .await
    }
}
