//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::catalog;
use crate::cli::args::Commands;
use crate::cli::help::generate_help;
use crate::cli::validation::parse_values;
use crate::config::SortLabConfig;
use crate::demo;
use crate::error::{ErrorCode, SortLabError};
use crate::report::{render, OutputFormat};
use crate::sort::{sort, Algorithm};
use anyhow::Result;
use std::io::{self, IsTerminal, Read, Write};
use tracing::debug;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>, config: &SortLabConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Some(Commands::Sort {
            algorithm,
            format,
            values,
        }) => run_sort(algorithm, format, values, config, &mut stdout),
        Some(Commands::Complexity { name }) => run_complexity(name, &mut stdout),
        Some(Commands::Demo) => run_demo(&mut stdout),
        None => Ok(emit(&mut stdout, generate_help().trim_end())?),
    }
}

/// Write `text` and a trailing newline, reporting failures as I/O errors
fn emit(out: &mut impl Write, text: &str) -> crate::error::Result<()> {
    writeln!(out, "{}", text)
        .and_then(|_| out.flush())
        .map_err(|e| {
            SortLabError::io_with_code(ErrorCode::IO_WRITE_FAILED, "failed to write output")
                .with_source(e)
        })
}

fn run_sort(
    algorithm: Option<String>,
    format: Option<OutputFormat>,
    values: Vec<String>,
    config: &SortLabConfig,
    out: &mut impl Write,
) -> Result<()> {
    let algorithm = match algorithm {
        Some(name) => name.parse::<Algorithm>()?,
        None => config.default_algorithm,
    };
    let format = format.unwrap_or(config.output_format);

    let input = if values.is_empty() {
        read_stdin_values()?
    } else {
        parse_values(&values)?
    };

    debug!(%algorithm, %format, len = input.len(), "Running sort command");

    let outcome = sort(&input, algorithm);
    emit(out, &render(&outcome, format)?)?;
    Ok(())
}

fn read_stdin_values() -> crate::error::Result<Vec<i64>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(SortLabError::validation_with_code(
            ErrorCode::VALIDATION_EMPTY_INPUT,
            "no values given; pass them as arguments or pipe them on stdin",
            Some("values".to_string()),
        ));
    }

    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer).map_err(|e| {
        SortLabError::io_with_code(ErrorCode::IO_READ_FAILED, "failed to read stdin").with_source(e)
    })?;

    parse_values(&[buffer])
}

fn run_complexity(name: Option<String>, out: &mut impl Write) -> Result<()> {
    let text = match name {
        Some(name) => catalog::describe_complexity(&name).to_string(),
        None => format!("Time Complexities:\n{}", demo::complexity_table()),
    };
    emit(out, &text)?;
    Ok(())
}

fn run_demo(out: &mut impl Write) -> Result<()> {
    let text = format!(
        "{}\n\nTime Complexities:\n{}",
        demo::demonstrate_sorting(),
        demo::complexity_table()
    );
    emit(out, &text)?;
    Ok(())
}
