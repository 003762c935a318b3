//! Guided walkthrough of both executable sorts on a fixed array

use crate::catalog;
use crate::report::format_result;
use crate::sort::{sort, Algorithm};

/// Input used by the walkthrough; contains a duplicate on purpose
pub const DEMO_ARRAY: [i64; 7] = [5, 3, 6, 2, 3, 1, 7];

/// Sort [`DEMO_ARRAY`] with every executable algorithm and the standard library
pub fn demonstrate_sorting() -> String {
    let original = DEMO_ARRAY.to_vec();
    let mut sections = vec![
        format!("Original Array: {:?}", original),
        "=".repeat(50),
    ];

    for algorithm in Algorithm::ALL {
        let outcome = sort(&original, algorithm);
        // Each report is followed by a blank line
        let report = format_result(
            algorithm.label(),
            Some(outcome.sorted.as_slice()),
            outcome.swaps,
        );
        sections.push(format!("{}\n", report));
    }

    let mut std_sorted = original.clone();
    std_sorted.sort_unstable();
    sections.push(format!("Standard Library Sort: {:?}", std_sorted));

    sections.join("\n")
}

/// One `Name sort: complexity` line per catalog entry
pub fn complexity_table() -> String {
    catalog::entries()
        .map(|(name, complexity)| format!("{} sort: {}", name.title(), complexity))
        .collect::<Vec<_>>()
        .join("\n")
}
