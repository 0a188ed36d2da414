//! Subcommand handlers
//!
//! Each handler returns the text to print on stdout so it can be tested
//! without capturing the process output.

pub mod boards;
pub mod diagnose;
pub mod fix;
pub mod move_task;
pub mod populate;

use taskboard_kanban::{FileStore, KanbanContext, KanbanOperationProcessor};

use crate::cli::Commands;
use crate::config::TaskboardConfig;
use crate::error::CliResult;

/// Everything a handler needs: the store-backed context and the processor
/// that writes activity entries
#[derive(Clone)]
pub struct Runtime {
    pub ctx: KanbanContext,
    pub processor: KanbanOperationProcessor,
}

impl Runtime {
    pub fn from_config(config: &TaskboardConfig) -> Self {
        let mut ctx = KanbanContext::new(FileStore::new(&config.data_dir));
        if let Some(session) = config.session() {
            ctx = ctx.with_session(session);
        }
        let processor = match config.actor() {
            Some(actor) => KanbanOperationProcessor::with_actor(actor),
            None => KanbanOperationProcessor::new(),
        };
        Self { ctx, processor }
    }
}

/// Run one subcommand and print its output
pub async fn dispatch(command: Commands, config: &TaskboardConfig) -> CliResult<()> {
    tracing::debug!(data_dir = %config.data_dir.display(), ?command, "running command");
    let runtime = Runtime::from_config(config);

    let output = match command {
        Commands::Diagnose { json } => diagnose::run(&runtime, json).await?,
        Commands::Fix { json } => fix::run(&runtime, json).await?,
        Commands::Populate => populate::run(&runtime).await?,
        Commands::Boards { all } => boards::run(&runtime, all).await?,
        Commands::Move {
            board,
            task,
            to,
            position,
        } => move_task::run(&runtime, &board, &task, &to, position).await?,
    };

    println!("{output}");
    Ok(())
}
