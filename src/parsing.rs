//! Parsing of expected measurement tokens
//!
//! Expected values are written the way they appear on the lab sheet, e.g. `"5cm"`,
//! `"50 cm"` or a bare `"60"`. This module turns them into plain [`f64`] values,
//! discarding the unit.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Signed decimal number, optionally followed by a `cm` unit (case-insensitive).
///
/// Digits and whitespace are ASCII only, and a single trailing newline is tolerated.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^([-+]?\d*\.?\d+)\s*(cm)?\n?\z").expect("token pattern is a valid regex")
});

/// Errors that can occur while parsing expected tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Can't parse expected token: {token:?}")]
    InvalidToken { token: String },
}

type Result<T> = core::result::Result<T, ParseError>;

/// Parses a single expected token into its numeric value
///
/// # Arguments
/// * `token` - Token such as `"5cm"`, `"-3.5CM"` or `"60"`
///
/// # Returns
/// * `Ok(f64)` - The numeric part of the token
/// * `Err(ParseError)` - If the token does not match the accepted grammar
pub fn parse_token(token: &str) -> Result<f64> {
    let invalid = || ParseError::InvalidToken {
        token: token.to_string(),
    };

    let captures = TOKEN_PATTERN.captures(token).ok_or_else(invalid)?;
    let number = captures.get(1).ok_or_else(invalid)?;
    number.as_str().parse::<f64>().map_err(|_| invalid())
}

/// Parses all expected tokens, stopping at the first invalid one
///
/// No partial results are returned; a single bad token fails the whole batch.
pub fn parse_expected<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<f64>> {
    let values = tokens
        .iter()
        .map(|token| parse_token(token.as_ref()))
        .collect::<Result<Vec<f64>>>()?;

    log::debug!("Parsed {} expected tokens", values.len());
    Ok(values)
}
