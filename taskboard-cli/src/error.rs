//! Error handling for the taskboard CLI
//!
//! Every failure becomes a [`CliError`] carrying an exit code and its source
//! chain, which is printed in full before the process exits.

use std::error::Error;
use std::fmt;

use taskboard_kanban::KanbanError;

use crate::config::ConfigError;
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// The message followed by every `Caused by:` in the source chain
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        let mut current_source = self.source();
        while let Some(err) = current_source {
            result.push_str(&format!("\n  Caused by: {err}"));
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<KanbanError> for CliError {
    fn from(error: KanbanError) -> Self {
        Self {
            message: error.to_string(),
            exit_code: EXIT_ERROR,
            source: Some(Box::new(error)),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self {
            message: error.to_string(),
            exit_code: EXIT_ERROR,
            source: Some(Box::new(error)),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        let mut chain = error.chain();
        let mut message = chain.next().map(ToString::to_string).unwrap_or_default();
        for cause in chain {
            message.push_str(&format!("\n  Caused by: {cause}"));
        }
        Self::new(message, EXIT_ERROR)
    }
}

/// Convert a result to an exit code, printing the error chain on failure
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{}", e.full_chain());
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}
