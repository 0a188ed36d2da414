//! ListUsers command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{operation, unlogged};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Every user record
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListUsers {}

operation!(ListUsers, verb = "list", noun = "users", description = "List all users");

impl ListUsers {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for ListUsers {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        unlogged(self, async {
            let users = ctx.read_all_users().await?;
            tracing::debug!(count = users.len(), "listed users");
            Ok(serde_json::to_value(&users)?)
        })
        .await
    }
}
