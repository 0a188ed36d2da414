//! Tracing setup for the CLI

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Pick the log level from the global flags. `--quiet` wins over the others.
pub fn log_level(verbose: bool, debug: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    }
}

/// Install a stderr subscriber. Stdout is reserved for command output.
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    let level = log_level(verbose, debug, quiet);
    registry()
        .with(EnvFilter::new(level.to_string()))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
