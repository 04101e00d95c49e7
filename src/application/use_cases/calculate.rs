//! # Calculate Use Case
//!
//! Dispatches a selected operation over two operands and renders the result
//! line shown to the user.

use std::fmt;

use crate::domain::choice::Operation;

/// One completed calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub lhs: f64,
    pub rhs: f64,
    pub value: f64,
}

impl fmt::Display for Calculation {
    /// Result line, e.g. `2.0 + 3.0 = 5.0`
    ///
    /// Debug float formatting keeps the trailing `.0` on whole values, which
    /// is the format users see at the prompt.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} {:?} = {:?}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.value
        )
    }
}

/// Calculation use case
///
/// Pure dispatch over the domain arithmetic; holds no state.
pub struct CalculateUseCase;

impl CalculateUseCase {
    /// Run the operation over the operands
    pub fn execute(&self, operation: Operation, lhs: f64, rhs: f64) -> Calculation {
        Calculation {
            operation,
            lhs,
            rhs,
            value: operation.apply(lhs, rhs),
        }
    }
}
