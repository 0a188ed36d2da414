//! taskboard - maintenance CLI for taskboard data
//!
//! Commands:
//! - `taskboard diagnose`: report duplicate task ids (read-only)
//! - `taskboard fix`: rename duplicate task ids and normalize order
//! - `taskboard populate`: add sample users and tags
//! - `taskboard boards`: list boards visible to the configured user
//! - `taskboard move <board> <task> --to <column>`: move a task
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::process;

use clap::{CommandFactory, Parser};

use taskboard_cli::commands::dispatch;
use taskboard_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use taskboard_cli::logging::configure_logging;
use taskboard_cli::{handle_cli_result, Cli, TaskboardConfig};

#[tokio::main]
async fn main() {
    let Cli {
        verbose,
        debug,
        quiet,
        data_dir,
        command,
    } = Cli::parse();

    let Some(command) = command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
            process::exit(EXIT_ERROR);
        }
        println!();
        process::exit(EXIT_SUCCESS);
    };

    configure_logging(verbose, debug, quiet);

    let config = match TaskboardConfig::load() {
        Ok(config) => config.with_data_dir(data_dir),
        Err(e) => process::exit(handle_cli_result::<()>(Err(e.into()))),
    };

    process::exit(handle_cli_result(dispatch(command, &config).await));
}
