//! # Use Cases

pub mod calculate;
