//! Input validation for CLI arguments

use crate::error::{ErrorCode, Result, SortLabError};

/// Parse integer tokens separated by commas or whitespace
///
/// Each argument may itself hold several values (`"3,1,2"` or `"3 1 2"`).
/// Empty tokens are ignored.
pub fn parse_values<S: AsRef<str>>(args: &[S]) -> Result<Vec<i64>> {
    args.iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .map(|token| {
            token.parse::<i64>().map_err(|e| {
                SortLabError::validation_with_code(
                    ErrorCode::VALIDATION_INVALID_VALUE,
                    format!("'{}' is not a valid integer", token),
                    Some("values".to_string()),
                )
                .with_source(e)
            })
        })
        .collect()
}
