//! GetCurrentUser command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation, unlogged};
use crate::types::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// The user record for the signed-in email, created on first sight.
///
/// A lookup is a read; only the first call for an email writes a record and
/// an activity entry.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetCurrentUser {}

operation!(GetCurrentUser, verb = "get", noun = "current user", description = "Get or create the signed-in user's record");

impl GetCurrentUser {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for GetCurrentUser {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let session = match ctx.require_session() {
            Ok(session) => session,
            Err(e) => return unlogged(self, async { Err(e) }).await,
        };

        match ctx.find_user_by_email(&session.email).await {
            Ok(Some(user)) => unlogged(self, async { Ok(serde_json::to_value(&user)?) }).await,
            Ok(None) => {
                logged(self, async {
                    let name = session
                        .name
                        .clone()
                        .unwrap_or_else(|| User::default_name(&session.email));
                    let mut user = User::new(&session.email, name);
                    user.avatar = session.avatar.clone();
                    tracing::info!(email = %user.email, "creating user record");
                    ctx.create_user(&user).await?;
                    Ok(serde_json::to_value(&user)?)
                })
                .await
            }
            Err(e) => unlogged(self, async { Err(e) }).await,
        }
    }
}
