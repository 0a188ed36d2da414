//! CreateBoard command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::{Board, Column};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Create a board owned by the signed-in user
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateBoard {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

operation!(CreateBoard, verb = "create", noun = "board", description = "Create a new board");

impl CreateBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            columns: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Start with To Do / In Progress / Done
    pub fn with_default_columns(self) -> Self {
        self.with_columns(Board::default_columns())
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for CreateBoard {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let session = ctx.require_session()?;
            if self.name.trim().is_empty() {
                return Err(KanbanError::invalid_value("name", "board name cannot be empty"));
            }

            let mut board = Board::new(&self.name, &session.email).with_columns(self.columns.clone());
            board.description = self.description.clone();
            for column in &mut board.columns {
                column.renumber();
            }

            ctx.create_board(&board).await?;
            Ok(serde_json::to_value(&board)?)
        })
        .await
    }
}
