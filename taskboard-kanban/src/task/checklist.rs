//! Checklist commands: add, toggle and remove items on a task

use super::{locate_task, touch};
use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{logged, operation};
use crate::types::{BoardId, ChecklistItem, ChecklistItemId, ColumnId, TaskId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// Append an item to a task's checklist
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChecklistItem {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub task_id: TaskId,
    pub text: String,
}

operation!(AddChecklistItem, verb = "add", noun = "checklist item", description = "Add an item to a task's checklist");

impl AddChecklistItem {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            task_id: task_id.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for AddChecklistItem {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let text = self.text.trim();
            if text.is_empty() {
                return Err(KanbanError::invalid_value("text", "checklist item cannot be empty"));
            }

            let (mut board, ci, ti) =
                locate_task(ctx, &self.board_id, &self.column_id, &self.task_id).await?;
            let task = &mut board.columns[ci].tasks[ti];
            let item = ChecklistItem::new(text);
            task.checklist_items.get_or_insert_with(Vec::new).push(item.clone());
            touch(task, ctx);

            ctx.write_columns(&board.id, &board.columns, Utc::now()).await?;
            Ok(serde_json::to_value(&item)?)
        })
        .await
    }
}

/// Flip an item between done and not done
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleChecklistItem {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub task_id: TaskId,
    pub item_id: ChecklistItemId,
}

operation!(ToggleChecklistItem, verb = "toggle", noun = "checklist item", description = "Toggle a checklist item's completion");

impl ToggleChecklistItem {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
        item_id: impl Into<ChecklistItemId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            task_id: task_id.into(),
            item_id: item_id.into(),
        }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for ToggleChecklistItem {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let (mut board, ci, ti) =
                locate_task(ctx, &self.board_id, &self.column_id, &self.task_id).await?;
            let task = &mut board.columns[ci].tasks[ti];
            let item = task
                .find_checklist_item_mut(&self.item_id)
                .ok_or_else(|| KanbanError::ChecklistItemNotFound {
                    id: self.item_id.to_string(),
                })?;
            item.completed = !item.completed;
            item.updated_at = Utc::now();
            let item = item.clone();
            touch(task, ctx);
            let (done, total) = task.checklist_counts();

            ctx.write_columns(&board.id, &board.columns, item.updated_at).await?;
            Ok(json!({ "item": item, "completed": done, "total": total }))
        })
        .await
    }
}

/// Remove an item from a task's checklist
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveChecklistItem {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub task_id: TaskId,
    pub item_id: ChecklistItemId,
}

operation!(RemoveChecklistItem, verb = "remove", noun = "checklist item", description = "Remove an item from a task's checklist");

impl RemoveChecklistItem {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        task_id: impl Into<TaskId>,
        item_id: impl Into<ChecklistItemId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            task_id: task_id.into(),
            item_id: item_id.into(),
        }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for RemoveChecklistItem {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async {
            let (mut board, ci, ti) =
                locate_task(ctx, &self.board_id, &self.column_id, &self.task_id).await?;
            let task = &mut board.columns[ci].tasks[ti];
            let items = task.checklist_items.get_or_insert_with(Vec::new);
            let before = items.len();
            items.retain(|i| i.id != self.item_id);
            if items.len() == before {
                return Err(KanbanError::ChecklistItemNotFound {
                    id: self.item_id.to_string(),
                });
            }
            touch(task, ctx);

            ctx.write_columns(&board.id, &board.columns, Utc::now()).await?;
            Ok(json!({ "removed": true, "id": self.item_id }))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Column, Task};

    async fn setup() -> (KanbanContext, BoardId) {
        let ctx = KanbanContext::in_memory();
        let task = Task::new("t", "To Do").with_id("t1").with_order(0);
        let board = Board::new("B", "ada@example.com")
            .with_columns(vec![Column::new("To Do").with_id("todo").with_tasks(vec![task])]);
        ctx.create_board(&board).await.unwrap();
        (ctx, board.id)
    }

    #[tokio::test]
    async fn test_checklist_lifecycle() {
        let (ctx, board_id) = setup().await;

        let item = AddChecklistItem::new(board_id.clone(), "todo", "t1", "  write tests ")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(item["text"], "write tests");
        assert_eq!(item["completed"], false);
        let item_id = item["id"].as_str().unwrap().to_string();
        assert!(item_id.starts_with("checklist-"));

        let toggled = ToggleChecklistItem::new(board_id.clone(), "todo", "t1", item_id.clone())
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(toggled["item"]["completed"], true);
        assert_eq!(toggled["completed"], 1);
        assert_eq!(toggled["total"], 1);

        RemoveChecklistItem::new(board_id.clone(), "todo", "t1", item_id.clone())
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        let board = ctx.read_board(&board_id).await.unwrap();
        assert!(board.columns[0].tasks[0].checklist().is_empty());

        let again = RemoveChecklistItem::new(board_id, "todo", "t1", item_id)
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(again, Err(KanbanError::ChecklistItemNotFound { .. })));
    }

    #[tokio::test]
    async fn test_toggle_unknown_item() {
        let (ctx, board_id) = setup().await;
        let result = ToggleChecklistItem::new(board_id, "todo", "t1", "nope")
            .execute(&ctx)
            .await
            .into_result();
        assert!(result.unwrap_err().is_not_found());
    }
}
