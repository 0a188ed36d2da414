//! ListTags command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{operation, unlogged};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Every tag, sorted by name
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListTags {}

operation!(ListTags, verb = "list", noun = "tags", description = "List all tags");

impl ListTags {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for ListTags {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        unlogged(self, async {
            let mut tags = ctx.read_all_tags().await?;
            tags.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            Ok(serde_json::to_value(&tags)?)
        })
        .await
    }
}
