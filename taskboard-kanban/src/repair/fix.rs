//! FixDuplicates command

use crate::context::KanbanContext;
use crate::error::{KanbanError, Result};
use crate::execution::{logged, operation};
use crate::id_gen::{generate_id, TASK_PREFIX};
use crate::types::{Board, BoardId, ColumnId, TaskId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamedTask {
    pub column_id: ColumnId,
    pub old_id: TaskId,
    pub new_id: TaskId,
}

/// What a repair changed on one board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRepair {
    pub board_id: BoardId,
    pub board_name: String,
    pub renamed: Vec<RenamedTask>,
    /// Tasks whose `order` was missing or did not match their index
    pub reordered: usize,
}

impl BoardRepair {
    pub fn changed(&self) -> bool {
        !self.renamed.is_empty() || self.reordered > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairReport {
    pub boards_scanned: usize,
    /// Boards that were written back
    pub updated: Vec<BoardRepair>,
}

impl RepairReport {
    pub fn renamed_count(&self) -> usize {
        self.updated.iter().map(|b| b.renamed.len()).sum()
    }
}

/// Repair one board in memory. The first occurrence of an id keeps it.
pub fn fix_board(board: &mut Board) -> BoardRepair {
    let mut repair = BoardRepair {
        board_id: board.id.clone(),
        board_name: board.name.clone(),
        ..Default::default()
    };

    for column in &mut board.columns {
        let mut taken: HashSet<TaskId> = column.tasks.iter().map(|t| t.id.clone()).collect();
        let mut seen: HashSet<TaskId> = HashSet::new();
        for (index, task) in column.tasks.iter_mut().enumerate() {
            if !seen.insert(task.id.clone()) {
                let new_id = unused_id(&taken, || TaskId::from_string(generate_id(TASK_PREFIX)));
                taken.insert(new_id.clone());
                tracing::info!(old = %task.id, new = %new_id, column = %column.name, "renaming duplicate task id");
                repair.renamed.push(RenamedTask {
                    column_id: column.id.clone(),
                    old_id: std::mem::replace(&mut task.id, new_id.clone()),
                    new_id,
                });
            }
            if task.order != Some(index) {
                task.order = Some(index);
                repair.reordered += 1;
            }
        }
    }
    repair
}

/// First generated id not already in `taken`
fn unused_id(taken: &HashSet<TaskId>, mut generate: impl FnMut() -> TaskId) -> TaskId {
    loop {
        let id = generate();
        if !taken.contains(&id) {
            return id;
        }
    }
}

/// Rename duplicate task ids and normalize `order` on every board.
/// Only boards that changed are written.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FixDuplicates {}

operation!(FixDuplicates, verb = "fix", noun = "duplicates", description = "Rename duplicate task ids and normalize task order");

impl FixDuplicates {
    pub fn new() -> Self {
        Self {}
    }

    /// Run the repair and return the typed report
    pub async fn repair(&self, ctx: &KanbanContext) -> Result<RepairReport> {
        let boards = ctx.read_all_boards().await?;
        let mut report = RepairReport {
            boards_scanned: boards.len(),
            ..Default::default()
        };

        for mut board in boards {
            let repair = fix_board(&mut board);
            if !repair.changed() {
                tracing::debug!(board = %board.name, "no changes needed");
                continue;
            }
            ctx.write_columns(&board.id, &board.columns, Utc::now()).await?;
            tracing::info!(
                board = %board.name,
                renamed = repair.renamed.len(),
                reordered = repair.reordered,
                "board repaired"
            );
            report.updated.push(repair);
        }
        Ok(report)
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for FixDuplicates {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        logged(self, async { Ok(serde_json::to_value(self.repair(ctx).await?)?) }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repair::DiagnoseDuplicates;
    use crate::types::{Column, Task};

    fn task(id: &str, title: &str, order: Option<usize>) -> Task {
        let mut t = Task::new(title, "To Do").with_id(id);
        t.order = order;
        t
    }

    #[test]
    fn test_fix_renames_second_occurrence() {
        let mut board = Board::new("B", "ada@example.com").with_columns(vec![Column::new("To Do")
            .with_tasks(vec![
                task("dup", "first", Some(0)),
                task("dup", "second", Some(1)),
            ])]);

        let repair = fix_board(&mut board);
        let tasks = &board.columns[0].tasks;

        assert_eq!(repair.renamed.len(), 1);
        assert_eq!(repair.reordered, 0);
        assert_eq!(tasks[0].id, "dup");
        assert_eq!(tasks[0].title, "first");
        assert_ne!(tasks[1].id, "dup");
        assert!(tasks[1].id.as_str().starts_with("task-"));
        assert_eq!(tasks[1].title, "second");
        assert_eq!(tasks[0].order, Some(0));
        assert_eq!(tasks[1].order, Some(1));
    }

    #[test]
    fn test_fix_fills_missing_order() {
        let mut board = Board::new("B", "ada@example.com").with_columns(vec![Column::new("To Do")
            .with_tasks(vec![task("a", "a", None), task("b", "b", Some(5))])]);

        let repair = fix_board(&mut board);
        assert!(repair.renamed.is_empty());
        assert_eq!(repair.reordered, 2);
        assert!(board.columns[0].is_contiguous());
    }

    #[tokio::test]
    async fn test_fix_is_idempotent_and_writes_only_changed_boards() {
        let ctx = KanbanContext::in_memory();
        let clean = Board::new("Clean", "ada@example.com").with_columns(vec![
            Column::new("To Do").with_tasks(vec![task("x", "x", Some(0))]),
        ]);
        let dirty = Board::new("Dirty", "ada@example.com").with_columns(vec![
            Column::new("To Do").with_tasks(vec![
                task("dup", "one", Some(0)),
                task("dup", "two", None),
            ]),
        ]);
        ctx.create_board(&clean).await.unwrap();
        ctx.create_board(&dirty).await.unwrap();

        let first = FixDuplicates::new().repair(&ctx).await.unwrap();
        assert_eq!(first.boards_scanned, 2);
        assert_eq!(first.updated.len(), 1);
        assert_eq!(first.updated[0].board_id, dirty.id);
        assert_eq!(first.renamed_count(), 1);
        assert_eq!(ctx.read_board(&clean.id).await.unwrap(), clean);

        let report = DiagnoseDuplicates::new().report(&ctx).await.unwrap();
        assert!(report.is_clean());
        assert_eq!(report.total_tasks, 3);

        let second = FixDuplicates::new().repair(&ctx).await.unwrap();
        assert!(second.updated.is_empty());
    }

    #[test]
    fn test_unused_id_skips_taken_ids() {
        let taken: HashSet<TaskId> = ["later", "dup"].into_iter().map(TaskId::from).collect();
        let mut candidates = ["later", "dup", "fresh"].into_iter();
        let id = unused_id(&taken, || TaskId::from(candidates.next().unwrap()));
        assert_eq!(id, "fresh");
    }

    #[test]
    fn test_fix_leaves_no_duplicate_ids() {
        let mut board = Board::new("B", "ada@example.com").with_columns(vec![Column::new("To Do")
            .with_tasks(vec![
                task("dup", "a", Some(0)),
                task("dup", "b", Some(1)),
                task("dup", "c", Some(2)),
                task("other", "d", Some(3)),
            ])]);

        let repair = fix_board(&mut board);
        let ids: HashSet<_> = board.columns[0].tasks.iter().map(|t| t.id.clone()).collect();

        assert_eq!(repair.renamed.len(), 2);
        assert_eq!(ids.len(), 4);
    }
}
