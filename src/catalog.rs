//! Time-complexity descriptions for the known sorting algorithms
//!
//! The catalog covers more algorithms than the engine executes. Lookups never
//! fail: an unrecognized name yields [`UNKNOWN_ALGORITHM`].

use serde::Serialize;
use std::str::FromStr;

/// Returned for any name outside the catalog
pub const UNKNOWN_ALGORITHM: &str = "Unknown algorithm";

/// Every algorithm the catalog can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmName {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl AlgorithmName {
    pub const ALL: [AlgorithmName; 5] = [
        AlgorithmName::Bubble,
        AlgorithmName::Selection,
        AlgorithmName::Insertion,
        AlgorithmName::Merge,
        AlgorithmName::Quick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmName::Bubble => "bubble",
            AlgorithmName::Selection => "selection",
            AlgorithmName::Insertion => "insertion",
            AlgorithmName::Merge => "merge",
            AlgorithmName::Quick => "quick",
        }
    }

    pub fn complexity(&self) -> &'static str {
        match self {
            AlgorithmName::Bubble => "O(n²) - Best: O(n), Worst: O(n²)",
            AlgorithmName::Selection => "O(n²) - Consistent O(n²) performance",
            AlgorithmName::Insertion => "O(n²) - Best: O(n), Worst: O(n²)",
            AlgorithmName::Merge => "O(n log n) - Consistent performance",
            AlgorithmName::Quick => "O(n log n) - Best: O(n log n), Worst: O(n²)",
        }
    }

    /// Name with its first letter capitalized, e.g. `Bubble`
    pub fn title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl FromStr for AlgorithmName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == lowered)
            .ok_or(())
    }
}

impl From<crate::sort::Algorithm> for AlgorithmName {
    fn from(algorithm: crate::sort::Algorithm) -> Self {
        match algorithm {
            crate::sort::Algorithm::Bubble => AlgorithmName::Bubble,
            crate::sort::Algorithm::Selection => AlgorithmName::Selection,
        }
    }
}

/// Describe the complexity of `algorithm`, case-insensitively
pub fn describe_complexity(algorithm: &str) -> &'static str {
    algorithm
        .parse::<AlgorithmName>()
        .map(|name| name.complexity())
        .unwrap_or(UNKNOWN_ALGORITHM)
}

/// All catalog entries in their canonical order
pub fn entries() -> impl Iterator<Item = (AlgorithmName, &'static str)> {
    AlgorithmName::ALL
        .into_iter()
        .map(|name| (name, name.complexity()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Algorithm;

    #[test]
    fn test_known_algorithms_have_big_o() {
        for name in ["bubble", "selection", "insertion", "merge", "quick"] {
            let complexity = describe_complexity(name);
            assert_ne!(complexity, UNKNOWN_ALGORITHM);
            assert!(complexity.contains("O("), "{name}: {complexity}");
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        assert_eq!(describe_complexity("unsupported"), "Unknown algorithm");
        assert_eq!(describe_complexity(""), UNKNOWN_ALGORITHM);
        assert_eq!(describe_complexity(" bubble"), UNKNOWN_ALGORITHM);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(describe_complexity("MERGE"), describe_complexity("merge"));
        assert_eq!(describe_complexity("Quick"), AlgorithmName::Quick.complexity());
    }

    #[test]
    fn test_entries_order() {
        let names: Vec<_> = entries().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec!["bubble", "selection", "insertion", "merge", "quick"]
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(AlgorithmName::Selection.title(), "Selection");
        assert_eq!(AlgorithmName::Quick.title(), "Quick");
    }

    #[test]
    fn test_every_executable_algorithm_is_catalogued() {
        for algorithm in Algorithm::ALL {
            let name = AlgorithmName::from(algorithm);
            assert_eq!(name.as_str(), algorithm.name());
            assert_eq!(describe_complexity(algorithm.name()), name.complexity());
        }
    }
}
