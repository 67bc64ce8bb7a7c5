//! Comma-separated integer input.

use crate::error::{EvoError, Result};

/// Parses text such as `"5, 3,9,-1"` into an integer sequence.
///
/// Tokens are trimmed before parsing. Blank input is rejected with
/// [`EvoError::EmptyInput`]; any token that is not an `i64` (including an
/// empty token between two commas) yields [`EvoError::InvalidInteger`] with
/// its zero-based position.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    if text.trim().is_empty() {
        return Err(EvoError::EmptyInput);
    }

    text.split(',')
        .enumerate()
        .map(|(position, raw)| {
            let token = raw.trim();
            token.parse::<i64>().map_err(|_| EvoError::InvalidInteger {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}
