//! Minicalc - Interactive Calculator
//!
//! Add/subtract calculator driven by a text menu loop on stdin/stdout.

// Enable coverage_attribute only when the coverage_nightly cfg is set
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use minicalc::adapter::console::TerminalConsole;
use minicalc::driver::{Args, Session};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    // No flags are consumed; this still wires up --help/--version
    let _args = Args::parse();

    let session = Session::new(TerminalConsole::new());
    session.run().await
}
