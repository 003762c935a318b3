//! Instrumented comparison sorts
//!
//! Every sort borrows its input and returns a freshly allocated buffer, so the
//! caller's sequence is never touched. The number of element exchanges is
//! counted per call and returned with the result; nothing is shared between
//! calls, which keeps the engine reentrant.

mod bubble;
mod selection;

use crate::error::{ErrorCode, SortLabError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Sorting algorithms with an executable implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Selection,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bubble, Algorithm::Selection];

    /// Lowercase name, as accepted by [`Algorithm::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
        }
    }

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            other => Err(SortLabError::validation_with_code(
                ErrorCode::VALIDATION_UNSUPPORTED_ALGORITHM,
                format!(
                    "'{}' is not an executable algorithm (expected one of: bubble, selection)",
                    other
                ),
                Some("algorithm".to_string()),
            )),
        }
    }
}

/// Result of a single sort invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOutcome {
    pub algorithm: Algorithm,
    pub sorted: Vec<i64>,
    pub swaps: u64,
}

/// Exchange counter scoped to one sort call
#[derive(Debug, Default)]
pub(crate) struct SwapCounter {
    count: u64,
}

impl SwapCounter {
    /// Exchange `buf[i]` and `buf[j]`, counting the exchange
    pub(crate) fn swap(&mut self, buf: &mut [i64], i: usize, j: usize) {
        buf.swap(i, j);
        self.count += 1;
    }

    pub(crate) fn total(&self) -> u64 {
        self.count
    }
}

/// Sort `input` into a new buffer with the given algorithm
pub fn sort(input: &[i64], algorithm: Algorithm) -> SortOutcome {
    let mut sorted = input.to_vec();

    if sorted.len() < 2 {
        trace!(len = sorted.len(), %algorithm, "Nothing to sort");
        return SortOutcome {
            algorithm,
            sorted,
            swaps: 0,
        };
    }

    let mut counter = SwapCounter::default();
    match algorithm {
        Algorithm::Bubble => bubble::sort_in_place(&mut sorted, &mut counter),
        Algorithm::Selection => selection::sort_in_place(&mut sorted, &mut counter),
    }

    debug!(
        len = sorted.len(),
        swaps = counter.total(),
        %algorithm,
        "Sort completed"
    );

    SortOutcome {
        algorithm,
        sorted,
        swaps: counter.total(),
    }
}

/// Sort an input that may be absent
///
/// An absent input yields an absent result; no exchanges are performed, so
/// its swap count reads as zero:
///
/// ```
/// use sortlab::{sort_optional, Algorithm};
///
/// let outcome = sort_optional(None, Algorithm::Bubble);
/// assert_eq!(outcome.map_or(0, |o| o.swaps), 0);
/// ```
pub fn sort_optional(input: Option<&[i64]>, algorithm: Algorithm) -> Option<SortOutcome> {
    input.map(|values| sort(values, algorithm))
}

/// Parse a selector and sort in one step
pub fn sort_by_name(input: &[i64], algorithm: &str) -> crate::error::Result<SortOutcome> {
    let algorithm = algorithm.parse::<Algorithm>()?;
    Ok(sort(input, algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let outcome = sort(&[], Algorithm::Bubble);
        assert!(outcome.sorted.is_empty());
        assert_eq!(outcome.swaps, 0);
    }

    #[test]
    fn test_single_element() {
        let outcome = sort(&[42], Algorithm::Selection);
        assert_eq!(outcome.sorted, vec![42]);
        assert_eq!(outcome.swaps, 0);
    }

    #[test]
    fn test_absent_input() {
        assert_eq!(sort_optional(None, Algorithm::Bubble), None);
        assert_eq!(sort_optional(None, Algorithm::Selection), None);
        for algorithm in Algorithm::ALL {
            let swaps = sort_optional(None, algorithm).map_or(0, |o| o.swaps);
            assert_eq!(swaps, 0);
        }

        let outcome = sort_optional(Some(&[2, 1][..]), Algorithm::Bubble).unwrap();
        assert_eq!(outcome.sorted, vec![1, 2]);
        assert_eq!(outcome.swaps, 1);
    }

    #[test]
    fn test_reverse_sorted_bubble() {
        let outcome = sort(&[5, 4, 3, 2, 1], Algorithm::Bubble);
        assert_eq!(outcome.sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(outcome.swaps, 10);
    }

    #[test]
    fn test_duplicates_bubble() {
        let outcome = sort(&[5, 3, 6, 2, 3, 1, 7], Algorithm::Bubble);
        assert_eq!(outcome.sorted, vec![1, 2, 3, 3, 5, 6, 7]);
    }

    #[test]
    fn test_random_selection() {
        let outcome = sort(&[64, 34, 25, 12, 22, 11, 90], Algorithm::Selection);
        assert_eq!(outcome.sorted, vec![11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_already_sorted() {
        for algorithm in Algorithm::ALL {
            let outcome = sort(&[1, 2, 3, 4, 5], algorithm);
            assert_eq!(outcome.sorted, vec![1, 2, 3, 4, 5]);
            assert_eq!(outcome.swaps, 0, "{algorithm} should not swap sorted input");
        }
    }

    #[test]
    fn test_input_not_modified() {
        let original = vec![5, 3, 6, 2, 3, 1, 7];
        let snapshot = original.clone();

        sort(&original, Algorithm::Bubble);
        sort(&original, Algorithm::Selection);

        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_counts_are_independent_per_call() {
        let first = sort(&[5, 4, 3, 2, 1], Algorithm::Bubble);
        let second = sort(&[2, 1], Algorithm::Bubble);
        assert_eq!(first.swaps, 10);
        assert_eq!(second.swaps, 1);
    }

    #[test]
    fn test_negative_values() {
        let outcome = sort(&[0, -3, 7, -3, i64::MIN, i64::MAX], Algorithm::Selection);
        assert_eq!(outcome.sorted, vec![i64::MIN, -3, -3, 0, 7, i64::MAX]);
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!(
            "SELECTION".parse::<Algorithm>().unwrap(),
            Algorithm::Selection
        );
        assert_eq!(" Bubble ".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
    }

    #[test]
    fn test_catalog_only_names_are_rejected() {
        for name in ["insertion", "merge", "quick", "bogo", ""] {
            let err = name.parse::<Algorithm>().unwrap_err();
            assert_eq!(err.code(), ErrorCode::VALIDATION_UNSUPPORTED_ALGORITHM);
            assert_eq!(err.exit_code(), 8);
        }
    }

    #[test]
    fn test_sort_by_name() {
        let outcome = sort_by_name(&[3, 1, 2], "Selection").unwrap();
        assert_eq!(outcome.algorithm, Algorithm::Selection);
        assert_eq!(outcome.sorted, vec![1, 2, 3]);

        assert!(sort_by_name(&[3, 1, 2], "quick").is_err());
    }

    #[test]
    fn test_outcome_serializes_lowercase_algorithm() {
        let outcome = sort(&[2, 1], Algorithm::Bubble);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["algorithm"], "bubble");
        assert_eq!(json["sorted"], serde_json::json!([1, 2]));
        assert_eq!(json["swaps"], 1);
    }
}
