//! CLI definition for `taskboard`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Maintenance tool for taskboard data.
///
/// Reads and writes the JSON documents under the data directory
/// (`.taskboard` by default). Settings come from `taskboard.toml` in the
/// working directory and `TASKBOARD_*` environment variables.
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Repair, seed and inspect taskboard data")]
#[command(
    long_about = "Repair, seed and inspect taskboard data.\n\n\
    Environment variables:\n  \
    TASKBOARD_DATA_DIR    Directory holding the document collections\n  \
    TASKBOARD_USER_EMAIL  Act as this user (board visibility, createdBy/updatedBy)\n  \
    TASKBOARD_USER_NAME   Display name for that user\n  \
    TASKBOARD_ACTOR       Actor recorded in the activity log"
)]
pub struct Cli {
    /// Enable verbose (trace) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report task ids repeated within a column. Changes nothing.
    Diagnose {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename duplicate task ids and normalize task order. Safe to re-run.
    Fix {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add the sample users and tags
    Populate,

    /// List boards visible to the configured user
    Boards {
        /// List every board regardless of owner
        #[arg(long)]
        all: bool,
    },

    /// Move a task to another column or position
    Move {
        /// Board id
        board: String,

        /// Task id
        task: String,

        /// Destination column, by id or name
        #[arg(long, value_name = "COLUMN")]
        to: String,

        /// Position in the destination column (default: end)
        #[arg(long, value_name = "N")]
        position: Option<usize>,
    },
}
