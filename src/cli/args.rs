//! CLI argument structures
//!
//! This module defines all command-line interface structures used by sortlab.

use crate::report::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sort integer sequences and report their cost
#[derive(Parser, Debug)]
#[command(name = "sortlab")]
#[command(about = "sortlab - Instrumented reference sorts with swap counting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort a sequence of integers
    #[command(name = "sort")]
    Sort {
        /// Algorithm to run (bubble or selection); defaults to the configured one
        #[arg(short = 'a', long)]
        algorithm: Option<String>,

        /// Output format (text or json); defaults to the configured one
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,

        /// Integers to sort, space or comma separated; read from stdin when omitted
        #[arg(allow_negative_numbers = true, value_name = "VALUES")]
        values: Vec<String>,
    },

    /// Show time complexity for one algorithm, or all of them
    #[command(name = "complexity")]
    Complexity {
        /// Algorithm name (bubble, selection, insertion, merge, quick)
        name: Option<String>,
    },

    /// Run both sorts on a sample array and print the complexity table
    #[command(name = "demo")]
    Demo,
}
