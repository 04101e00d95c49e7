//! # Terminal Console
//!
//! [`Console`] implementation over the process stdin/stdout. Ctrl-C while
//! waiting for a line surfaces as [`ReadEvent::Interrupted`], a closed input
//! stream as [`ReadEvent::Eof`].

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

use crate::domain::console::{Console, ReadEvent};

/// Console backed by the real terminal
pub struct TerminalConsole {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            stdout: tokio::io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for TerminalConsole {
    async fn read_line(&mut self) -> Result<ReadEvent> {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupt received while waiting for input");
                Ok(ReadEvent::Interrupted)
            }
            line = self.lines.next_line() => match line? {
                Some(line) => Ok(ReadEvent::Line(line)),
                None => {
                    debug!("input stream closed");
                    Ok(ReadEvent::Eof)
                }
            },
        }
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.stdout.write_all(text.as_bytes()).await?;
        // Prompts carry no newline, so flush to make them visible
        self.stdout.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.stdout.write_all(text.as_bytes()).await?;
        self.stdout.write_all(b"\n").await?;
        self.stdout.flush().await?;
        Ok(())
    }
}
