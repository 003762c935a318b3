use clap::Parser;
use sortlab::cli::{execute_command, get_log_level, Cli};
use sortlab::config::ConfigLoader;
use sortlab::SortLabError;
use std::io::IsTerminal;
use tracing::{debug, error, trace};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::new()
        .with_explicit_path(cli.config.clone())
        .load()
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(e.exit_code());
        }
    };

    // An explicit -v wins over the configured level
    let log_level = match (cli.verbose, config.log_level.as_deref()) {
        (0, Some(level)) => level.to_string(),
        (verbose, _) => get_log_level(verbose).to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("sortlab started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = execute_command(cli.command, &config) {
        error!("Fatal error: {}", e);
        match e.downcast_ref::<SortLabError>() {
            Some(err) => {
                eprintln!("Error: {}", err.user_message());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
