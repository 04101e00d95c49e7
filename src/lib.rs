//! # Minicalc
//!
//! Interactive command-line calculator with addition and subtraction.
//!
//! The crate follows a clean architecture with four layers:
//!
//! - **Domain layer**: core calculator rules and entities (no external deps)
//! - **Application layer**: application use cases
//! - **Adapter layer**: integration with the terminal (stdin/stdout)
//! - **Driver layer**: CLI and the interactive session loop

// Enable coverage_attribute only when the coverage_nightly cfg is set
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain layer (pure business logic)
pub mod domain;

// Application layer (use cases)
pub mod application;

// Adapter layer (infrastructure)
pub mod adapter;

// Driver layer (presentation)
pub mod driver;
