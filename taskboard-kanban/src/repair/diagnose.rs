//! DiagnoseDuplicates command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::execution::{operation, unlogged};
use crate::types::{Board, BoardId, Column, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use taskboard_operations::{async_trait, Execute, ExecutionResult};

/// An id that appears more than once in a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateId {
    pub board: String,
    pub column: String,
    pub task_id: TaskId,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDiagnosis {
    pub column_id: ColumnId,
    pub column_name: String,
    pub task_count: usize,
    pub duplicates: Vec<DuplicateId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDiagnosis {
    pub board_id: BoardId,
    pub board_name: String,
    /// Non-empty columns only
    pub columns: Vec<ColumnDiagnosis>,
}

/// Result of a diagnosis over every board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport {
    pub boards: Vec<BoardDiagnosis>,
    pub duplicates: Vec<DuplicateId>,
    pub total_tasks: usize,
    /// Sum of `count - 1` over every duplicated id
    pub duplicate_tasks: usize,
    pub unique_tasks: usize,
}

impl DiagnosisReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_tasks == 0
    }
}

/// Repeated ids in a column, in order of first appearance
fn repeated_ids(column: &Column) -> Vec<(TaskId, usize)> {
    let mut counts: HashMap<&TaskId, usize> = HashMap::new();
    let mut first_seen = Vec::new();
    for task in &column.tasks {
        let count = counts.entry(&task.id).or_insert(0);
        if *count == 0 {
            first_seen.push(&task.id);
        }
        *count += 1;
    }
    first_seen
        .into_iter()
        .filter_map(|id| match counts[id] {
            n if n > 1 => Some((id.clone(), n)),
            _ => None,
        })
        .collect()
}

/// Inspect one board without touching it
pub fn diagnose_board(board: &Board) -> BoardDiagnosis {
    let columns = board
        .columns
        .iter()
        .filter(|c| !c.tasks.is_empty())
        .map(|column| ColumnDiagnosis {
            column_id: column.id.clone(),
            column_name: column.name.clone(),
            task_count: column.tasks.len(),
            duplicates: repeated_ids(column)
                .into_iter()
                .map(|(task_id, count)| DuplicateId {
                    board: board.name.clone(),
                    column: column.name.clone(),
                    task_id,
                    count,
                })
                .collect(),
        })
        .collect();

    BoardDiagnosis {
        board_id: board.id.clone(),
        board_name: board.name.clone(),
        columns,
    }
}

/// Report duplicate task ids across all boards. Never writes.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DiagnoseDuplicates {}

operation!(DiagnoseDuplicates, verb = "diagnose", noun = "duplicates", description = "Report task ids repeated within a column");

impl DiagnoseDuplicates {
    pub fn new() -> Self {
        Self {}
    }

    /// Run the diagnosis and return the typed report
    pub async fn report(&self, ctx: &KanbanContext) -> crate::error::Result<DiagnosisReport> {
        let boards = ctx.read_all_boards().await?;
        tracing::debug!(boards = boards.len(), "diagnosing duplicate task ids");

        let mut report = DiagnosisReport::default();
        for board in &boards {
            let diagnosis = diagnose_board(board);
            for column in &diagnosis.columns {
                report.total_tasks += column.task_count;
                for dup in &column.duplicates {
                    report.duplicate_tasks += dup.count - 1;
                    report.duplicates.push(dup.clone());
                }
            }
            report.boards.push(diagnosis);
        }
        report.unique_tasks = report.total_tasks - report.duplicate_tasks;

        if !report.is_clean() {
            tracing::warn!(duplicates = report.duplicate_tasks, "duplicate task ids found");
        }
        Ok(report)
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for DiagnoseDuplicates {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        unlogged(self, async { Ok(serde_json::to_value(self.report(ctx).await?)?) }).await
    }
}
