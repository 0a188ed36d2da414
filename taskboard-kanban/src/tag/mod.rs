//! Tag commands

mod create;
mod delete;
mod list;
mod update;

pub use create::CreateTag;
pub use delete::DeleteTag;
pub use list::ListTags;
pub use update::UpdateTag;

use crate::error::{KanbanError, Result};

/// Accept `#RGB` or `#RRGGBB`
pub(crate) fn validate_color(color: &str) -> Result<()> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(KanbanError::invalid_value(
            "color",
            format!("'{color}' is not a hex color like #3B82F6"),
        ))
    }
}
