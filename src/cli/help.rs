//! Help text generation and utilities

use crate::cli::args::Cli;
use clap::CommandFactory;

/// Generate comprehensive help text for the CLI
pub fn generate_help() -> String {
    Cli::command().render_help().to_string()
}

/// Get the log filter for a verbosity level
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
