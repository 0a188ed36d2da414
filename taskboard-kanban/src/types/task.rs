//! Task types: Task and ChecklistItem

use super::ids::{ChecklistItemId, TagId, TaskId, UserId};
use crate::id_gen::{generate_id, TASK_PREFIX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A task card living inside a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,

    /// Mirrors the name of the containing column
    pub status: String,

    /// 0-based position inside the column. Legacy documents may lack it or
    /// hold something that is not a position; both read as `None` and the
    /// repair pass fills it in.
    #[serde(
        default,
        deserialize_with = "lenient_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<usize>,

    #[serde(default)]
    pub tags: Vec<TagId>,

    #[serde(default)]
    pub assigned_to: Vec<UserId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    /// Set when the task lands in the last column; never cleared by a move
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,

    /// Minutes
    #[serde(default)]
    pub time_spent: u32,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist_items: Option<Vec<ChecklistItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Members written by other clients, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_order<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok()))
}

impl Task {
    /// Create a task with a generated `task-` id in the given status
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::from_string(generate_id(TASK_PREFIX)),
            title: title.into(),
            description: String::new(),
            status: status.into(),
            order: None,
            tags: Vec::new(),
            assigned_to: Vec::new(),
            due_date: None,
            created_at: now,
            created_by: None,
            updated_at: now,
            updated_by: None,
            completed_date: None,
            time_spent: 0,
            time_estimate: None,
            checklist_items: None,
            notes: None,
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    pub fn is_completed(&self) -> bool {
        self.completed_date.is_some()
    }

    /// Checklist items, empty when the task has none
    pub fn checklist(&self) -> &[ChecklistItem] {
        self.checklist_items.as_deref().unwrap_or_default()
    }

    /// (completed, total) checklist counts
    pub fn checklist_counts(&self) -> (usize, usize) {
        let items = self.checklist();
        let done = items.iter().filter(|i| i.completed).count();
        (done, items.len())
    }

    /// Fraction of checklist items completed, 0.0 without a checklist
    pub fn progress(&self) -> f64 {
        match self.checklist_counts() {
            (_, 0) => 0.0,
            (done, total) => done as f64 / total as f64,
        }
    }

    pub fn find_checklist_item_mut(&mut self, id: &ChecklistItemId) -> Option<&mut ChecklistItem> {
        self.checklist_items
            .as_mut()
            .and_then(|items| items.iter_mut().find(|i| &i.id == id))
    }
}

/// One line of a task's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ChecklistItemId::from_string(generate_id("checklist-")),
            text: text.into(),
            completed: false,
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }
}
