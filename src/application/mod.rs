//! # Application Layer

pub mod use_cases;
