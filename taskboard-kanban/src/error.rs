//! Error types for the kanban engine

use crate::store::StoreError;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    #[error("user not found: {id}")]
    UserNotFound { id: String },

    #[error("tag not found: {id}")]
    TagNotFound { id: String },

    #[error("checklist item not found: {id}")]
    ChecklistItemNotFound { id: String },

    /// A mutation needs a signed-in user and there is none
    #[error("no user session")]
    NoSession,

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Underlying document store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A stored document does not match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    pub fn board_not_found(id: impl ToString) -> Self {
        Self::BoardNotFound { id: id.to_string() }
    }

    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Board, column, task, user, tag or checklist item missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::TaskNotFound { .. }
                | Self::UserNotFound { .. }
                | Self::TagNotFound { .. }
                | Self::ChecklistItemNotFound { .. }
        )
    }
}
