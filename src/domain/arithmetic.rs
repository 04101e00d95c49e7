//! # Arithmetic
//!
//! Pure binary operations over `f64` operands. Overflow follows IEEE-754
//! semantics and produces infinity rather than an error.

/// Add two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}
