//! Drag-and-drop resolution
//!
//! Turns a finished drag (the dragged task and whatever it was released over)
//! into the [`MoveTask`] the board should run, or nothing. The hovered id may
//! name a column or a task; column ids are checked first.

use crate::task::MoveTask;
use crate::types::{Board, TaskId};

/// What to do with a finished drag
#[derive(Debug, Clone)]
pub enum DropAction {
    Move(MoveTask),
    Ignore,
}

impl DropAction {
    pub fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }

    pub fn into_move(self) -> Option<MoveTask> {
        match self {
            Self::Move(mv) => Some(mv),
            Self::Ignore => None,
        }
    }
}

/// Resolve a drop of `active` over `over` on `board`
pub fn resolve_drop(board: &Board, active: &TaskId, over: Option<&str>) -> DropAction {
    let Some(over) = over else {
        return DropAction::Ignore;
    };
    let Some(source) = board.column_of_task(active) else {
        tracing::debug!(task = %active, "dragged task is not on this board");
        return DropAction::Ignore;
    };

    let (destination, position) = if let Some(column) = board.columns.iter().find(|c| c.id == over) {
        if column.id == source.id {
            return DropAction::Ignore;
        }
        (column, column.tasks.len())
    } else {
        let target = TaskId::from(over);
        if &target == active {
            return DropAction::Ignore;
        }
        let Some(column) = board.column_of_task(&target) else {
            return DropAction::Ignore;
        };
        let index = column
            .tasks
            .iter()
            .position(|t| t.id == target)
            .unwrap_or(column.tasks.len());
        (column, index)
    };

    let mv = MoveTask::new(
        board.id.clone(),
        active.clone(),
        source.id.clone(),
        destination.id.clone(),
        position,
    )
    .into_last_column(board.is_terminal_column(&destination.id));
    DropAction::Move(mv)
}
