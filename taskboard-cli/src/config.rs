//! Configuration loading
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `taskboard.toml` in the working directory
//! 3. `TASKBOARD_*` environment variables
//!
//! The `--data-dir` flag is applied on top by the caller.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use taskboard_kanban::Session;
use thiserror::Error;

pub const CONFIG_FILE: &str = "taskboard.toml";
pub const ENV_PREFIX: &str = "TASKBOARD_";
pub const DEFAULT_DATA_DIR: &str = ".taskboard";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration value for {key}: {message}")]
    Invalid { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskboardConfig {
    /// Root of the document collections
    pub data_dir: PathBuf,
    /// Act as this user; without it no boards are visible
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    /// Recorded on activity entries; defaults to the user email
    pub actor: Option<String>,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            user_email: None,
            user_name: None,
            actor: None,
        }
    }
}

impl TaskboardConfig {
    /// Load from `taskboard.toml` in the working directory and the environment
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load using a specific config file. A missing file is not an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(email) = &self.user_email {
            if !email.contains('@') {
                return Err(ConfigError::Invalid {
                    key: "user_email".to_string(),
                    message: format!("'{email}' is not an email address"),
                });
            }
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                key: "data_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Replace the data directory when the flag was given
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// Session for the configured user, if any
    pub fn session(&self) -> Option<Session> {
        self.user_email.as_ref().map(|email| {
            let session = Session::new(email);
            match &self.user_name {
                Some(name) => session.with_name(name),
                None => session,
            }
        })
    }

    /// Actor for activity entries
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref().or(self.user_email.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    const VARS: [&str; 4] = [
        "TASKBOARD_DATA_DIR",
        "TASKBOARD_USER_EMAIL",
        "TASKBOARD_USER_NAME",
        "TASKBOARD_ACTOR",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let config = TaskboardConfig::load_from(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(config, TaskboardConfig::default());
        assert!(config.session().is_none());
    }

    #[test]
    #[serial]
    fn test_file_then_env_precedence() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "data_dir = \"from-file\"\nuser_email = \"file@example.com\"\nuser_name = \"File\"\n",
        )
        .unwrap();

        let config = TaskboardConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("from-file"));
        assert_eq!(config.actor(), Some("file@example.com"));

        std::env::set_var("TASKBOARD_USER_EMAIL", "env@example.com");
        std::env::set_var("TASKBOARD_ACTOR", "cron");
        let config = TaskboardConfig::load_from(&path).unwrap();
        clear_env();

        assert_eq!(config.data_dir, PathBuf::from("from-file"));
        assert_eq!(config.user_email.as_deref(), Some("env@example.com"));
        assert_eq!(config.user_name.as_deref(), Some("File"));
        assert_eq!(config.actor(), Some("cron"));

        let session = config.session().unwrap();
        assert_eq!(session.email, "env@example.com");
        assert_eq!(session.name.as_deref(), Some("File"));
    }

    #[test]
    #[serial]
    fn test_invalid_email_rejected() {
        clear_env();
        std::env::set_var("TASKBOARD_USER_EMAIL", "not-an-email");
        let temp = TempDir::new().unwrap();
        let result = TaskboardConfig::load_from(&temp.path().join(CONFIG_FILE));
        clear_env();
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_data_dir_flag_overrides() {
        let config = TaskboardConfig::default().with_data_dir(Some(PathBuf::from("/srv/tb")));
        assert_eq!(config.data_dir, PathBuf::from("/srv/tb"));
        let config = config.with_data_dir(None);
        assert_eq!(config.data_dir, PathBuf::from("/srv/tb"));
    }
}
