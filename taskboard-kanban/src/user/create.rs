//! CreateUser command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Add a user record
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateUser {
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

operation!(CreateUser, verb = "create", noun = "user", description = "Create a user record");

impl CreateUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            avatar: None,
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
impl Execute<KanbanContext, KanbanError> for CreateUser {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let email = self.email.trim();
            if !email.contains('@') {
                return Err(KanbanError::invalid_value("email", format!("'{email}' is not an email address")));
            }

            let name = self.name.clone().unwrap_or_else(|| User::default_name(email));
            let mut user = User::new(email, name);
            user.avatar = self.avatar.clone();
            ctx.create_user(&user).await?;
            Ok(serde_json::to_value(&user)?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::ListUsers;

    #[tokio::test]
    async fn test_create_and_list() {
        let ctx = KanbanContext::in_memory();
        CreateUser::new("john@example.com")
            .with_name("John Doe")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        CreateUser::new("jane@example.com")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        let users = ListUsers::new().execute(&ctx).await.into_result().unwrap();
        let mut names: Vec<_> = users
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["name"].as_str().unwrap().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["John Doe", "jane"]);
    }

    #[tokio::test]
    async fn test_rejects_bad_email() {
        let ctx = KanbanContext::in_memory();
        let result = CreateUser::new("nobody").execute(&ctx).await.into_result();
        assert!(matches!(result, Err(KanbanError::InvalidValue { .. })));
    }
}
