//! Client-side application state
//!
//! The board UI keeps a little state of its own: which board is showing and
//! which modal is open. [`AppState`] holds it and changes only through the
//! named transitions below.

use serde::{Deserialize, Serialize};

/// Sentinel index for "no task selected"
pub const NO_INDEX: i64 = -1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardModal {
    pub is_open: bool,
    /// "Add New Board" or "Edit Board"
    pub variant: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskModal {
    pub is_open: bool,
    pub variant: String,
    pub title: String,
    pub index: i64,
    /// Name of the column the task lives in
    pub name: String,
}

impl Default for TaskModal {
    fn default() -> Self {
        Self {
            is_open: false,
            variant: String::new(),
            title: String::new(),
            index: NO_INDEX,
            name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteModal {
    pub is_open: bool,
    pub variant: String,
    pub title: String,
    pub status: String,
    pub index: i64,
}

impl Default for DeleteModal {
    fn default() -> Self {
        Self {
            is_open: false,
            variant: String::new(),
            title: String::new(),
            status: String::new(),
            index: NO_INDEX,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    current_board_name: String,
    board_modal: BoardModal,
    task_modal: TaskModal,
    delete_modal: DeleteModal,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_board_name(&self) -> &str {
        &self.current_board_name
    }

    pub fn board_modal(&self) -> &BoardModal {
        &self.board_modal
    }

    pub fn task_modal(&self) -> &TaskModal {
        &self.task_modal
    }

    pub fn delete_modal(&self) -> &DeleteModal {
        &self.delete_modal
    }

    pub fn set_current_board_name(&mut self, name: impl Into<String>) {
        self.current_board_name = name.into();
    }

    pub fn open_board_modal(&mut self, variant: impl Into<String>) {
        self.board_modal = BoardModal {
            is_open: true,
            variant: variant.into(),
        };
    }

    pub fn close_board_modal(&mut self) {
        self.board_modal = BoardModal::default();
    }

    pub fn open_task_modal(
        &mut self,
        variant: impl Into<String>,
        title: impl Into<String>,
        index: i64,
        name: impl Into<String>,
    ) {
        self.task_modal = TaskModal {
            is_open: true,
            variant: variant.into(),
            title: title.into(),
            index,
            name: name.into(),
        };
    }

    pub fn close_task_modal(&mut self) {
        self.task_modal = TaskModal::default();
    }

    pub fn open_delete_modal(
        &mut self,
        variant: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<String>,
        index: i64,
    ) {
        self.delete_modal = DeleteModal {
            is_open: true,
            variant: variant.into(),
            title: title.into(),
            status: status.into(),
            index,
        };
    }

    pub fn close_delete_modal(&mut self) {
        self.delete_modal = DeleteModal::default();
    }
}
