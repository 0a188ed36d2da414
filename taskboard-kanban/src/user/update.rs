//! UpdateUser command

use crate::context::{fields_from, KanbanContext};
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::UserId;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Change a user's name or avatar
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateUser {
    pub id: UserId,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

operation!(UpdateUser, verb = "update", noun = "user", description = "Update a user's name or avatar");

impl UpdateUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for UpdateUser {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let mut fields = fields_from([
                ("name", self.name.clone().map(Value::String)),
                ("avatar", self.avatar.clone().map(Value::String)),
            ]);
            fields.insert("updatedAt".to_string(), serde_json::to_value(Utc::now())?);

            ctx.update_user_fields(&self.id, fields).await?;
            Ok(serde_json::to_value(ctx.read_user(&self.id).await?)?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    #[tokio::test]
    async fn test_update_user() {
        let ctx = KanbanContext::in_memory();
        let user = User::new("sarah@example.com", "sarah");
        ctx.create_user(&user).await.unwrap();

        let result = UpdateUser::new(user.id.clone())
            .with_name("Sarah Wilson")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(result["name"], "Sarah Wilson");
        assert_eq!(result["email"], "sarah@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let ctx = KanbanContext::in_memory();
        let result = UpdateUser::new("ghost").with_name("x").execute(&ctx).await.into_result();
        assert!(matches!(result, Err(KanbanError::UserNotFound { .. })));
    }
}
