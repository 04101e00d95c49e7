//! # CLI Argument Parsing

use clap::Parser;

/// Interactive add/subtract calculator
///
/// The program consumes no flags or arguments; all interaction happens on
/// stdin/stdout once the menu loop starts. clap still provides the derived
/// `--help` and `--version` surface.
#[derive(Parser, Debug, Clone)]
#[command(name = "minicalc")]
#[command(about = "Interactive command-line calculator", long_about = None)]
#[command(version)]
pub struct Args {}
