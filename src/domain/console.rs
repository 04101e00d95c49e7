//! # Console Port
//!
//! Abstracts line-oriented terminal I/O so the session loop can be driven by
//! scripted fakes in tests.

use anyhow::Result;
use async_trait::async_trait;

/// Outcome of one blocking read from the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A full line of input, trailing newline stripped
    Line(String),
    /// The user interrupted (Ctrl-C) while we were waiting
    Interrupted,
    /// The input stream closed
    Eof,
}

/// Console port
///
/// Line-oriented terminal I/O used by the session loop. Interrupts and end of
/// input surface as explicit [`ReadEvent`] variants rather than errors, so the
/// loop can match on them to decide its next state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Console: Send {
    /// Block until a line, an interrupt, or end of input
    async fn read_line(&mut self) -> Result<ReadEvent>;

    /// Write text without a trailing newline and flush (for prompts)
    async fn write(&mut self, text: &str) -> Result<()>;

    /// Write a full line
    async fn write_line(&mut self, text: &str) -> Result<()>;
}
