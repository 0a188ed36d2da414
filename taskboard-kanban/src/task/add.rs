//! AddTask command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::{BoardId, ChecklistItem, ColumnId, Tag, Task, TagId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Append a task to the end of a column
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTask {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<TagId>,
    #[serde(default)]
    pub assigned_to: Vec<UserId>,
    pub due_date: Option<DateTime<Utc>>,
    pub time_estimate: Option<u32>,
    pub checklist_items: Option<Vec<ChecklistItem>>,
    pub notes: Option<String>,
}

operation!(AddTask, verb = "add", noun = "task", description = "Add a task to the end of a column");

impl AddTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.tags = tags.iter().map(|t| t.id.clone()).collect();
        self
    }

    pub fn with_assignees(mut self, users: Vec<UserId>) -> Self {
        self.assigned_to = users;
        self
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_time_estimate(mut self, minutes: u32) -> Self {
        self.time_estimate = Some(minutes);
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for AddTask {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            if self.title.trim().is_empty() {
                return Err(KanbanError::invalid_value("title", "task title cannot be empty"));
            }

            let mut board = ctx.read_board(&self.board_id).await?;
            let column = board
                .find_column_mut(&self.column_id)
                .ok_or_else(|| KanbanError::column_not_found(&self.column_id))?;

            let mut task = Task::new(&self.title, &column.name)
                .with_description(&self.description)
                .with_order(column.tasks.len());
            task.tags = self.tags.clone();
            task.assigned_to = self.assigned_to.clone();
            task.due_date = self.due_date;
            task.time_estimate = self.time_estimate;
            task.checklist_items = self.checklist_items.clone();
            task.notes = self.notes.clone();
            task.created_by = ctx.session_email();
            task.updated_by = ctx.session_email();

            column.tasks.push(task.clone());
            ctx.write_columns(&board.id, &board.columns, task.created_at).await?;
            Ok(serde_json::to_value(&task)?)
        })
        .await
    }
}
