//! PopulateSampleData command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::{Tag, TagId, User, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

const SAMPLE_USERS: [(&str, &str, &str); 4] = [
    ("user1", "John Doe", "john@example.com"),
    ("user2", "Jane Smith", "jane@example.com"),
    ("user3", "Mike Johnson", "mike@example.com"),
    ("user4", "Sarah Wilson", "sarah@example.com"),
];

const SAMPLE_TAGS: [(&str, &str, &str, &str); 5] = [
    ("tag1", "Bug", "#EF4444", "Issues that need fixing"),
    ("tag2", "Feature", "#3B82F6", "New functionality"),
    ("tag3", "Enhancement", "#10B981", "Improvements to existing features"),
    ("tag4", "Design", "#8B5CF6", "UI/UX related tasks"),
    ("tag5", "Research", "#F59E0B", "Investigation and analysis"),
];

/// Outcome of seeding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulateReport {
    pub users_added: Vec<String>,
    pub tags_added: Vec<String>,
    /// Names of records that could not be written, usually because they exist
    pub skipped: Vec<String>,
}

/// Seed the sample users and tags. A record that fails to insert is
/// skipped, so running twice is harmless.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PopulateSampleData {}

operation!(PopulateSampleData, verb = "populate", noun = "sample data", description = "Add sample users and tags");

impl PopulateSampleData {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn populate(&self, ctx: &KanbanContext) -> PopulateReport {
        let mut report = PopulateReport::default();

        for (id, name, email) in SAMPLE_USERS {
            let mut user = User::new(email, name);
            user.id = UserId::from(id);
            match ctx.create_user(&user).await {
                Ok(()) => report.users_added.push(name.to_string()),
                Err(e) => {
                    tracing::warn!(user = name, error = %e, "skipping sample user");
                    report.skipped.push(name.to_string());
                }
            }
        }

        for (id, name, color, description) in SAMPLE_TAGS {
            let mut tag = Tag::new(name, color).with_description(description);
            tag.id = TagId::from(id);
            match ctx.create_tag(&tag).await {
                Ok(()) => report.tags_added.push(name.to_string()),
                Err(e) => {
                    tracing::warn!(tag = name, error = %e, "skipping sample tag");
                    report.skipped.push(name.to_string());
                }
            }
        }

        report
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for PopulateSampleData {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async { Ok(serde_json::to_value(self.populate(ctx).await)?) }).await
    }
}
