//! ListBoards command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{operation, unlogged};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// List the boards the signed-in user owns or was granted access to.
/// Without a session the list is empty.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListBoards {}

operation!(ListBoards, verb = "list", noun = "boards", description = "List boards visible to the current user");

impl ListBoards {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for ListBoards {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        unlogged(self, async {
            let Some(session) = ctx.session() else {
                tracing::debug!("no session, returning no boards");
                return Ok(Value::Array(Vec::new()));
            };

            let boards: Vec<_> = ctx
                .read_all_boards()
                .await?
                .into_iter()
                .filter(|b| b.is_visible_to(&session.email))
                .collect();
            tracing::debug!(email = %session.email, count = boards.len(), "listed boards");
            Ok(serde_json::to_value(&boards)?)
        })
        .await
    }
}
