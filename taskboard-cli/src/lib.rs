//! Library half of the `taskboard` binary
//!
//! Split out so the command handlers and output renderers can be tested
//! without spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;

pub use cli::{Cli, Commands};
pub use config::{ConfigError, TaskboardConfig};
pub use error::{handle_cli_result, CliError, CliResult};
