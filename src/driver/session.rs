//! # Interactive Session
//!
//! The menu/input state machine. Each iteration prompts for a choice token,
//! then two operands, computes, prints the result line, and loops. Only an
//! exit request, an interrupt, or a closed input stream ends the session;
//! malformed input and unexpected errors are reported and recovered.

use anyhow::Result;
use log::{debug, info, warn};

use crate::application::use_cases::calculate::CalculateUseCase;
use crate::domain::choice::Choice;
use crate::domain::console::{Console, ReadEvent};
use crate::domain::error::InputError;
use crate::domain::operand::parse_operand;

const BANNER: &[&str] = &[
    "Simple Calculator",
    "================",
    "Operations:",
    "1. Addition (a + b)",
    "2. Subtraction (a - b)",
    "3. Exit",
];

const CHOICE_PROMPT: &str = "\nSelect operation (1-3): ";
const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";

const MSG_INVALID_CHOICE: &str = "Invalid choice. Please select 1, 2, or 3.";
const MSG_INVALID_NUMBER: &str = "Invalid input. Please enter valid numbers.";
const MSG_GOODBYE: &str = "Goodbye!";
const MSG_EXITING: &str = "\nExiting...";

/// What the loop should do after an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// What came back from an operand prompt
enum OperandInput {
    Value(f64),
    Invalid(InputError),
    /// Interrupt or end of input while waiting for the operand
    Closed,
}

/// Interactive calculator session
///
/// Ephemeral: lives for one run of the loop and holds no state across
/// iterations.
pub struct Session<C: Console> {
    console: C,
    calculate: CalculateUseCase,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            calculate: CalculateUseCase,
        }
    }

    /// Run the loop until exit, interrupt, or end of input
    ///
    /// Unexpected errors inside an iteration are printed and the loop keeps
    /// going; the session is only terminated by an explicit exit path.
    pub async fn run(mut self) -> Result<()> {
        info!("starting calculator session");
        for line in BANNER {
            self.console.write_line(line).await?;
        }

        loop {
            match self.iteration().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    warn!("recovered from unexpected error: {e:#}");
                    self.console
                        .write_line(&format!("An error occurred: {e}"))
                        .await?;
                }
            }
        }

        info!("calculator session ended");
        Ok(())
    }

    /// One pass through the state machine: choice, operands, result
    async fn iteration(&mut self) -> Result<Flow> {
        self.console.write(CHOICE_PROMPT).await?;
        let token = match self.console.read_line().await? {
            ReadEvent::Line(token) => token,
            ReadEvent::Interrupted | ReadEvent::Eof => {
                self.console.write_line(MSG_EXITING).await?;
                return Ok(Flow::Exit);
            }
        };

        let operation = match token.parse::<Choice>() {
            Ok(Choice::Exit) => {
                self.console.write_line(MSG_GOODBYE).await?;
                return Ok(Flow::Exit);
            }
            Ok(Choice::Operation(operation)) => operation,
            Err(err) => {
                debug!("{err}");
                self.console.write_line(MSG_INVALID_CHOICE).await?;
                return Ok(Flow::Continue);
            }
        };

        let lhs = match self.operand(FIRST_OPERAND_PROMPT).await? {
            OperandInput::Value(value) => value,
            OperandInput::Invalid(err) => return self.recover_invalid_number(err).await,
            OperandInput::Closed => {
                self.console.write_line(MSG_EXITING).await?;
                return Ok(Flow::Exit);
            }
        };
        let rhs = match self.operand(SECOND_OPERAND_PROMPT).await? {
            OperandInput::Value(value) => value,
            OperandInput::Invalid(err) => return self.recover_invalid_number(err).await,
            OperandInput::Closed => {
                self.console.write_line(MSG_EXITING).await?;
                return Ok(Flow::Exit);
            }
        };

        let calculation = self.calculate.execute(operation, lhs, rhs);
        debug!("computed {calculation}");
        self.console.write_line(&calculation.to_string()).await?;
        Ok(Flow::Continue)
    }

    /// Prompt for and parse one operand
    async fn operand(&mut self, prompt: &str) -> Result<OperandInput> {
        self.console.write(prompt).await?;
        match self.console.read_line().await? {
            ReadEvent::Line(token) => Ok(match parse_operand(&token) {
                Ok(value) => OperandInput::Value(value),
                Err(err) => OperandInput::Invalid(err),
            }),
            ReadEvent::Interrupted | ReadEvent::Eof => Ok(OperandInput::Closed),
        }
    }

    /// Abandon the iteration after a bad operand, back to the menu
    async fn recover_invalid_number(&mut self, err: InputError) -> Result<Flow> {
        debug!("{err}");
        self.console.write_line(MSG_INVALID_NUMBER).await?;
        Ok(Flow::Continue)
    }
}
