//! Board-level types: Board and Column

use super::ids::{BoardId, ColumnId, TaskId};
use super::task::Task;
use crate::id_gen::{generate_id, COLUMN_PREFIX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A board document: the whole board, columns and tasks included, is stored
/// as one document and rewritten as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Email of the creator
    pub owner_id: String,
    /// Additional emails with edit rights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Board {
    /// Create a board owned by `owner_email` with no columns
    pub fn new(name: impl Into<String>, owner_email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BoardId::new(),
            name: name.into(),
            description: None,
            columns: Vec::new(),
            owner_id: owner_email.into(),
            owners: None,
            members: None,
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// The columns every first board starts with
    pub fn default_columns() -> Vec<Column> {
        ["To Do", "In Progress", "Done"]
            .into_iter()
            .map(Column::new)
            .collect()
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Position of a column in display order
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// The last column in display order is the "done" column
    pub fn terminal_column(&self) -> Option<&Column> {
        self.columns.last()
    }

    pub fn is_terminal_column(&self, id: &ColumnId) -> bool {
        self.terminal_column().is_some_and(|c| &c.id == id)
    }

    /// Column that currently holds a task
    pub fn column_of_task(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|c| c.find_task(task_id).is_some())
    }

    /// Number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Whether `email` owns the board or was granted access to it
    pub fn is_visible_to(&self, email: &str) -> bool {
        self.owner_id == email
            || self.owners.iter().flatten().any(|e| e == email)
            || self.members.iter().flatten().any(|e| e == email)
    }
}

/// A named, ordered bucket of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Members written by other clients, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Column {
    /// Create an empty column with a generated `col-` id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ColumnId::from_string(generate_id(COLUMN_PREFIX)),
            name: name.into(),
            tasks: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// Set every task's order to its index. Returns true if anything changed.
    pub fn renumber(&mut self) -> bool {
        let mut changed = false;
        for (index, task) in self.tasks.iter_mut().enumerate() {
            if task.order != Some(index) {
                task.order = Some(index);
                changed = true;
            }
        }
        changed
    }

    /// True when order values are exactly 0..len
    pub fn is_contiguous(&self) -> bool {
        self.tasks
            .iter()
            .enumerate()
            .all(|(index, task)| task.order == Some(index))
    }
}
