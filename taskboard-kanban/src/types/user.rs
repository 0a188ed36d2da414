//! People and labels: User and Tag

use super::ids::{TagId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record, keyed by email for lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: email.into(),
            name: name.into(),
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name derived from an email when the provider gives none
    pub fn default_name(email: &str) -> String {
        email.split('@').next().unwrap_or(email).to_string()
    }
}

/// A label that can be attached to tasks by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// CSS color, e.g. `#EF4444`
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TagId::new(),
            name: name.into(),
            color: color.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
