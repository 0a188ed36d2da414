//! UpdateTag command

use super::validate_color;
use crate::context::{fields_from, KanbanContext};
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::TagId;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Rename, recolor or redescribe a tag
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateTag {
    pub id: TagId,
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

operation!(UpdateTag, verb = "update", noun = "tag", description = "Update a tag");

impl UpdateTag {
    pub fn new(id: impl Into<TagId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for UpdateTag {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            if let Some(color) = &self.color {
                validate_color(color)?;
            }

            let mut fields = fields_from([
                ("name", self.name.clone().map(Value::String)),
                ("color", self.color.clone().map(Value::String)),
                ("description", self.description.clone().map(Value::String)),
            ]);
            fields.insert("updatedAt".to_string(), serde_json::to_value(Utc::now())?);

            ctx.update_tag_fields(&self.id, fields).await?;
            Ok(serde_json::to_value(ctx.read_tag(&self.id).await?)?)
        })
        .await
    }
}
