//! `taskboard move`

use anyhow::{anyhow, Context};
use taskboard_kanban::task::MoveTask;
use taskboard_kanban::{Board, BoardId, Column, OperationProcessor, TaskId};

use super::Runtime;

/// Find a column by id, falling back to a case-insensitive name match
pub fn find_column<'a>(board: &'a Board, key: &str) -> Option<&'a Column> {
    board
        .columns
        .iter()
        .find(|c| c.id == key)
        .or_else(|| board.columns.iter().find(|c| c.name.eq_ignore_ascii_case(key)))
}

/// Build the move for a task, deriving the source column and whether the
/// destination is the board's last column
pub fn plan_move(board: &Board, task: &str, to: &str, position: Option<usize>) -> anyhow::Result<MoveTask> {
    let task_id = TaskId::from(task);
    let source = board
        .column_of_task(&task_id)
        .ok_or_else(|| anyhow!("task {task} is not on board {}", board.id))?;
    let destination = find_column(board, to)
        .ok_or_else(|| anyhow!("board {} has no column {to}", board.id))?;

    // Highest index the task can land on once it has left its source
    let last_slot = if source.id == destination.id {
        destination.tasks.len().saturating_sub(1)
    } else {
        destination.tasks.len()
    };
    let position = position.unwrap_or(last_slot).min(last_slot);
    Ok(MoveTask::new(
        board.id.clone(),
        task_id,
        source.id.clone(),
        destination.id.clone(),
        position,
    )
    .into_last_column(board.is_terminal_column(&destination.id)))
}

pub async fn run(
    runtime: &Runtime,
    board: &str,
    task: &str,
    to: &str,
    position: Option<usize>,
) -> anyhow::Result<String> {
    let board = runtime.ctx.read_board(&BoardId::from(board)).await?;
    let mv = plan_move(&board, task, to, position)?;
    runtime
        .processor
        .process(&mv, &runtime.ctx)
        .await
        .with_context(|| format!("moving task {task}"))?;

    let destination = find_column(&board, to).map(|c| c.name.as_str()).unwrap_or(to);
    Ok(format!("Moved {task} to {destination} at position {}", mv.new_position))
}
