//! CreateTag command

use super::validate_color;
use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::{Tag, TagId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Create a tag. Without an explicit id a fresh one is generated.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTag {
    pub id: Option<TagId>,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
}

operation!(CreateTag, verb = "create", noun = "tag", description = "Create a tag");

impl CreateTag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    /// Use a fixed id, e.g. for seeded data
    pub fn with_id(mut self, id: impl Into<TagId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for CreateTag {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            if self.name.trim().is_empty() {
                return Err(KanbanError::invalid_value("name", "tag name cannot be empty"));
            }
            validate_color(&self.color)?;

            let mut tag = Tag::new(self.name.trim(), &self.color);
            if let Some(id) = &self.id {
                tag.id = id.clone();
            }
            tag.description = self.description.clone();

            ctx.create_tag(&tag).await?;
            Ok(serde_json::to_value(&tag)?)
        })
        .await
    }
}
