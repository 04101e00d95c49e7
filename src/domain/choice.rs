//! # Menu Choice
//!
//! The operation selector entered at the menu prompt, as a closed enum with an
//! explicit fallible parse instead of string comparison at dispatch sites.

use std::str::FromStr;

use crate::domain::arithmetic::{add, subtract};
use crate::domain::error::InputError;

/// Arithmetic operation selectable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    /// Operator symbol shown in the result line
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }

    /// Apply the operation to two operands
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
        }
    }
}

/// One menu selection: an operation to perform, or exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Operation(Operation),
    Exit,
}

impl FromStr for Choice {
    type Err = InputError;

    /// Map a menu token to a choice
    ///
    /// Recognized tokens are "1" (add), "2" (subtract), and "3" (exit),
    /// surrounding whitespace ignored.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "1" => Ok(Choice::Operation(Operation::Add)),
            "2" => Ok(Choice::Operation(Operation::Subtract)),
            "3" => Ok(Choice::Exit),
            other => Err(InputError::InvalidChoice(other.to_string())),
        }
    }
}
