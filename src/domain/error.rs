//! # Input Errors
//!
//! Recoverable errors raised while interpreting user input. Both variants are
//! handled inside the session loop; neither terminates the session.

use thiserror::Error;

/// Invalid user input at one of the prompts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Choice token outside the recognized menu set
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    /// Operand token that does not parse as a number
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}
