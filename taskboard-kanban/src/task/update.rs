//! UpdateTask command

use super::{locate_task, touch};
use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::{BoardId, ChecklistItem, ColumnId, TagId, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Merge the provided fields into a task. Position and status are left to
/// [`MoveTask`](super::MoveTask); nothing is renumbered here.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub task_id: TaskId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<TagId>>,
    pub assigned_to: Option<Vec<UserId>>,
    pub due_date: Option<DateTime<Utc>>,
    pub time_spent: Option<u32>,
    pub time_estimate: Option<u32>,
    pub checklist_items: Option<Vec<ChecklistItem>>,
    pub notes: Option<String>,
}

operation!(UpdateTask, verb = "update", noun = "task", description = "Update a task's fields");

impl UpdateTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            task_id: task_id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagId>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_assignees(mut self, users: Vec<UserId>) -> Self {
        self.assigned_to = Some(users);
        self
    }

    pub fn with_time_spent(mut self, minutes: u32) -> Self {
        self.time_spent = Some(minutes);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for UpdateTask {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
                return Err(KanbanError::invalid_value("title", "task title cannot be empty"));
            }

            let (mut board, ci, ti) =
                locate_task(ctx, &self.board_id, &self.column_id, &self.task_id).await?;
            let task = &mut board.columns[ci].tasks[ti];

            if let Some(title) = &self.title {
                task.title = title.clone();
            }
            if let Some(description) = &self.description {
                task.description = description.clone();
            }
            if let Some(tags) = &self.tags {
                task.tags = tags.clone();
            }
            if let Some(users) = &self.assigned_to {
                task.assigned_to = users.clone();
            }
            if self.due_date.is_some() {
                task.due_date = self.due_date;
            }
            if let Some(minutes) = self.time_spent {
                task.time_spent = minutes;
            }
            if self.time_estimate.is_some() {
                task.time_estimate = self.time_estimate;
            }
            if self.checklist_items.is_some() {
                task.checklist_items = self.checklist_items.clone();
            }
            if self.notes.is_some() {
                task.notes = self.notes.clone();
            }
            touch(task, ctx);

            let updated = task.clone();
            ctx.write_columns(&board.id, &board.columns, updated.updated_at).await?;
            Ok(serde_json::to_value(&updated)?)
        })
        .await
    }
}
