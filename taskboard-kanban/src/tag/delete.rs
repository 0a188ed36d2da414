//! DeleteTag command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::TagId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Delete a tag. Tasks keep any reference to its id.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTag {
    pub id: TagId,
}

operation!(DeleteTag, verb = "delete", noun = "tag", description = "Delete a tag");

impl DeleteTag {
    pub fn new(id: impl Into<TagId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for DeleteTag {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let tag = ctx.read_tag(&self.id).await?;
            ctx.delete_tag(&self.id).await?;
            Ok(json!({ "deleted": true, "id": tag.id, "name": tag.name }))
        })
        .await
    }
}
