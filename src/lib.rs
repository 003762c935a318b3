//! # sortlab
//!
//! Reference implementations of bubble sort and selection sort that never
//! mutate their input and report how many exchanges they performed.
//!
//! ## Usage
//!
//! ```bash
//! sortlab sort --algorithm selection 64 34 25 12 22 11 90
//! sortlab complexity merge
//! sortlab demo
//! ```
//!
//! ```
//! use sortlab::{describe_complexity, format_result, sort, Algorithm};
//!
//! let outcome = sort(&[5, 4, 3, 2, 1], Algorithm::Bubble);
//! assert_eq!(outcome.sorted, vec![1, 2, 3, 4, 5]);
//! assert_eq!(outcome.swaps, 10);
//!
//! assert!(describe_complexity("bubble").contains("O("));
//! assert_eq!(
//!     format_result("Bubble Sort", Some(outcome.sorted.as_slice()), outcome.swaps),
//!     "Bubble Sort Result:\nArray: [1, 2, 3, 4, 5]\nSwaps: 10"
//! );
//! ```
//!
//! ## Modules
//!
//! - `sort` - Instrumented bubble and selection sorts with per-call swap counts
//! - `catalog` - Complexity descriptions keyed by algorithm name
//! - `report` - Text and JSON rendering of sort results
//! - `config` - TOML configuration with environment overrides
//! - `cli` - Command-line argument parsing and routing
//! - `demo` - Walkthrough on a fixed sample array
//! - `error` - Unified error type with error codes
pub mod catalog;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod report;
pub mod sort;


pub use catalog::{describe_complexity, AlgorithmName, UNKNOWN_ALGORITHM};
pub use error::{ErrorCode, SortLabError};
pub use report::{format_result, OutputFormat, NULL_ARRAY_MESSAGE};
pub use sort::{sort, sort_by_name, sort_optional, Algorithm, SortOutcome};
