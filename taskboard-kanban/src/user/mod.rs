//! User commands

mod create;
mod current;
mod list;
mod update;

pub use create::CreateUser;
pub use current::GetCurrentUser;
pub use list::ListUsers;
pub use update::UpdateUser;
