//! EnsureDefaultBoard command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::Board;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{async_trait, Execute, ExecutionResult};

pub const DEFAULT_BOARD_NAME: &str = "My First Board";
pub const DEFAULT_BOARD_DESCRIPTION: &str = "Welcome to your Kanban board!";

/// First sign-in: give the user a starter board if they can see none
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EnsureDefaultBoard {}

operation!(EnsureDefaultBoard, verb = "ensure", noun = "default board", description = "Create a starter board for a user with no boards");

impl EnsureDefaultBoard {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for EnsureDefaultBoard {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let session = ctx.require_session()?;

            let existing = ctx
                .read_all_boards()
                .await?
                .into_iter()
                .find(|b| b.is_visible_to(&session.email));
            if let Some(board) = existing {
                return Ok(json!({ "created": false, "board": board }));
            }

            tracing::info!(email = %session.email, "creating default board for new user");
            let board = Board::new(DEFAULT_BOARD_NAME, &session.email)
                .with_description(DEFAULT_BOARD_DESCRIPTION)
                .with_columns(Board::default_columns());
            ctx.create_board(&board).await?;
            Ok(json!({ "created": true, "board": board }))
        })
        .await
    }
}
