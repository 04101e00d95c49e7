//! # Domain Layer
//!
//! Pure calculator rules: arithmetic, menu choices, operand parsing, and the
//! console port the session loop is written against.

pub mod arithmetic;
pub mod choice;
pub mod console;
pub mod error;
pub mod operand;
