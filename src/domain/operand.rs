//! # Operand Parsing

use crate::domain::error::InputError;

/// Parse an operand token as a 64-bit float
///
/// Accepts anything `f64` parses, including scientific notation, `inf` and
/// `NaN`. Surrounding whitespace is ignored.
pub fn parse_operand(token: &str) -> Result<f64, InputError> {
    let trimmed = token.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))
}
