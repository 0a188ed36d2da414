//! UpdateBoard command

use crate::context::{fields_from, KanbanContext};
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::{BoardId, Column};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Partially update a board. Only the provided fields are written.
///
/// Replacing `columns` writes the given array as-is; task order fields are
/// not renumbered here.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateBoard {
    pub id: BoardId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub columns: Option<Vec<Column>>,
    pub owners: Option<Vec<String>>,
    pub members: Option<Vec<String>>,
}

operation!(UpdateBoard, verb = "update", noun = "board", description = "Update board name, description, columns or sharing");

impl UpdateBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_owners(mut self, owners: Vec<String>) -> Self {
        self.owners = Some(owners);
        self
    }

    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = Some(members);
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for UpdateBoard {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                return Err(KanbanError::invalid_value("name", "board name cannot be empty"));
            }

            let mut fields = fields_from([
                ("name", self.name.clone().map(Value::String)),
                ("description", self.description.clone().map(Value::String)),
                ("columns", self.columns.as_ref().map(serde_json::to_value).transpose()?),
                ("owners", self.owners.as_ref().map(serde_json::to_value).transpose()?),
                ("members", self.members.as_ref().map(serde_json::to_value).transpose()?),
            ]);
            fields.insert("updatedAt".to_string(), serde_json::to_value(Utc::now())?);

            ctx.update_board_fields(&self.id, fields).await?;
            let board = ctx.read_board(&self.id).await?;
            Ok(serde_json::to_value(&board)?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    #[tokio::test]
    async fn test_update_board_partial() {
        let ctx = KanbanContext::in_memory();
        let board = Board::new("Old", "ada@example.com")
            .with_description("keep me")
            .with_columns(Board::default_columns());
        ctx.create_board(&board).await.unwrap();

        let result = UpdateBoard::new(board.id.clone())
            .with_name("New")
            .with_members(vec!["bob@example.com".into()])
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(result["name"], "New");
        assert_eq!(result["description"], "keep me");
        assert_eq!(result["members"][0], "bob@example.com");
        assert_eq!(result["columns"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_missing_board() {
        let ctx = KanbanContext::in_memory();
        let result = UpdateBoard::new("nope")
            .with_name("x")
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::BoardNotFound { .. })));
    }
}
