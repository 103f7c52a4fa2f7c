//! Error types for the sample-kit CLI.

use thiserror::Error;

use crate::error::{ArithmeticError, UserDataError};

/// Errors surfaced by CLI parsing and command execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// No command was supplied.
    #[error("missing command; run with --help for usage")]
    MissingCommand,
    /// The command name was not recognised.
    #[error("unknown command: {value}")]
    UnknownCommand {
        /// Command name that was not recognised.
        value: String,
    },
    /// A positional argument or flag value was not supplied.
    #[error("missing value for {name}")]
    MissingValue {
        /// Name of the argument or flag missing its value.
        name: &'static str,
    },
    /// More arguments were supplied than the command accepts.
    #[error("unexpected argument: {value}")]
    UnexpectedArgument {
        /// First argument that was not consumed.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {name}: '{value}' ({message})")]
    InvalidNumber {
        /// Argument or flag associated with the invalid number.
        name: &'static str,
        /// Raw value supplied.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// A calculator operator was not `+` or `*`.
    #[error("unknown operator '{value}'; expected '+' or '*'")]
    UnknownOperator {
        /// Operator text that was not recognised.
        value: String,
    },
    /// The user record was not valid JSON.
    #[error("invalid user JSON: {message}")]
    InvalidJson {
        /// Parser error message.
        message: String,
    },
    /// Settings could not be loaded from files or the environment.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader error message.
        message: String,
    },
    /// An arithmetic helper rejected its input.
    #[error("{source}")]
    Arithmetic {
        /// Underlying arithmetic error.
        #[from]
        #[source]
        source: ArithmeticError,
    },
    /// The user record failed validation.
    #[error("{source}")]
    UserData {
        /// Underlying validation error.
        #[from]
        #[source]
        source: UserDataError,
    },
}
