//! # Driver Layer
//!
//! CLI entry points and the interactive session loop.

pub mod cli;
pub mod session;

pub use cli::Args;
pub use session::Session;
