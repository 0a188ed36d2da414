//! Board commands

mod create;
mod delete;
mod ensure;
mod get;
mod list;
mod update;

pub use create::CreateBoard;
pub use delete::DeleteBoard;
pub use ensure::EnsureDefaultBoard;
pub use get::GetBoard;
pub use list::ListBoards;
pub use update::UpdateBoard;
