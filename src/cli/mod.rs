//! Line-oriented shell over [`BudgetController`](crate::core::BudgetController).

pub mod commands;
pub mod context;
pub mod output;
pub mod render;
pub mod shell;

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::BudgetError;

pub use context::ShellContext;
pub use shell::run_cli;

/// Environment variable that switches the shell into non-interactive script mode.
pub const SCRIPT_ENV: &str = "MONEYMIND_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failures that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input error: {0}")]
    Input(String),
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Io(io) => CliError::Io(io),
            other => CliError::Input(other.to_string()),
        }
    }
}

/// Failures of a single command. Reported, then the shell keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;
