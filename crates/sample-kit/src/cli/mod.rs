//! Command-line front end for the sample-kit helpers.
//!
//! This module provides argument parsing and command execution for the
//! `sample-kit` binary. The binary delegates to these functions so they can
//! be exercised in tests without spawning a subprocess.

mod error;

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::arithmetic::{add, divide, fibonacci};
use crate::calculator::{Calculator, Operator};
use crate::greeting::{DEFAULT_PAGE, default_greeting, format_greeting, user_list_url};
use crate::settings::UserApiSettings;
use crate::user_data::process_user_data;
use crate::validation::validate_email;

pub use error::CliError;

/// Usage text printed for `--help`.
pub const USAGE: &str = concat!(
    "Usage: sample-kit <command> [arguments]\n",
    "\n",
    "Commands:\n",
    "  greet [<name>]                     Print a greeting\n",
    "  add <a> <b>                        Print a + b\n",
    "  divide <a> <b>                     Print a / b\n",
    "  fibonacci <n>                      Print the n-th Fibonacci number\n",
    "  users-url [--page <n>] [--per-page <n>]\n",
    "                                     Print the user-list URL\n",
    "  validate-email <email>             Report whether an email is well formed\n",
    "  process-user <json>                Validate and format a user record\n",
    "  calc <a> <op> <b> [<op> <b> ...]   Fold + and * left to right, printing history\n",
    "\n",
    "Options:\n",
    "  -h, --help                         Print this help output\n",
    "\n",
    "Environment:\n",
    "  SAMPLE_KIT_BASE_URL                Base URL for users-url\n",
    "  SAMPLE_KIT_PER_PAGE                Default page size for users-url\n",
);

/// A parsed command ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Greet `name`, or the world when absent.
    Greet {
        /// Name to greet.
        name: Option<String>,
    },
    /// Add two numbers.
    Add {
        /// Left operand.
        a: f64,
        /// Right operand.
        b: f64,
    },
    /// Divide two numbers.
    Divide {
        /// Dividend.
        a: f64,
        /// Divisor.
        b: f64,
    },
    /// Compute a Fibonacci term.
    Fibonacci {
        /// Index of the term.
        n: i64,
    },
    /// Build the user-list URL.
    UsersUrl {
        /// Requested page, defaulting to the first.
        page: Option<u32>,
        /// Requested page size, defaulting to the configured one.
        per_page: Option<u32>,
    },
    /// Check an email address.
    ValidateEmail {
        /// Address to check.
        email: String,
    },
    /// Validate and format a JSON user record.
    ProcessUser {
        /// Raw JSON text of the record.
        json: String,
    },
    /// Run a chain of calculator operations.
    Calc {
        /// Starting value.
        first: f64,
        /// Operator and right operand for each step, in order.
        steps: Vec<(Operator, f64)>,
    },
}

impl Command {
    /// Returns the command name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Greet { .. } => "greet",
            Self::Add { .. } => "add",
            Self::Divide { .. } => "divide",
            Self::Fibonacci { .. } => "fibonacci",
            Self::UsersUrl { .. } => "users-url",
            Self::ValidateEmail { .. } => "validate-email",
            Self::ProcessUser { .. } => "process-user",
            Self::Calc { .. } => "calc",
        }
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Run the parsed command.
    Command(Command),
}

/// Parses CLI arguments (without the program name) into a command.
///
/// # Errors
///
/// Returns [`CliError`] when the command is missing or unknown, or when its
/// arguments are missing, surplus, or cannot be parsed.
///
/// # Example
///
/// ```
/// use sample_kit::cli::{Command, ParseOutcome, parse_args};
///
/// let args = vec!["fibonacci".to_owned(), "10".to_owned()];
/// let outcome = parse_args(args.into_iter()).expect("parse args");
///
/// assert_eq!(outcome, ParseOutcome::Command(Command::Fibonacci { n: 10 }));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let name = args.next().ok_or(CliError::MissingCommand)?;
    let command = match name.as_str() {
        "-h" | "--help" => return Ok(ParseOutcome::Help),
        "greet" => Command::Greet { name: args.next() },
        "add" => Command::Add {
            a: next_number(&mut args, "<a>")?,
            b: next_number(&mut args, "<b>")?,
        },
        "divide" => Command::Divide {
            a: next_number(&mut args, "<a>")?,
            b: next_number(&mut args, "<b>")?,
        },
        "fibonacci" => Command::Fibonacci {
            n: next_number(&mut args, "<n>")?,
        },
        "users-url" => parse_users_url(&mut args)?,
        "validate-email" => Command::ValidateEmail {
            email: next_value(&mut args, "<email>")?,
        },
        "process-user" => Command::ProcessUser {
            json: next_value(&mut args, "<json>")?,
        },
        "calc" => parse_calc(&mut args)?,
        _ => return Err(CliError::UnknownCommand { value: name }),
    };

    if let Some(extra) = args.next() {
        return Err(CliError::UnexpectedArgument { value: extra });
    }
    Ok(ParseOutcome::Command(command))
}

/// Executes a command and returns the text to print on success.
///
/// # Errors
///
/// Returns [`CliError`] wrapping the library error when the underlying
/// helper rejects its input, or [`CliError::InvalidJson`] when a user record
/// cannot be parsed.
///
/// # Example
///
/// ```
/// use sample_kit::UserApiSettings;
/// use sample_kit::cli::{Command, execute};
///
/// let settings = UserApiSettings { base_url: None, per_page: None };
/// let output = execute(&Command::Add { a: 2.0, b: 3.0 }, &settings).expect("add");
///
/// assert_eq!(output, "5");
/// ```
pub fn execute(command: &Command, settings: &UserApiSettings) -> Result<String, CliError> {
    debug!(command = command.name(), "executing command");
    let output = match command {
        Command::Greet { name } => name
            .as_deref()
            .map_or_else(default_greeting, format_greeting),
        Command::Add { a, b } => add(*a, *b).to_string(),
        Command::Divide { a, b } => divide(*a, *b)?.to_string(),
        Command::Fibonacci { n } => fibonacci(*n)?.to_string(),
        Command::UsersUrl { page, per_page } => user_list_url(
            settings.base_url(),
            page.unwrap_or(DEFAULT_PAGE),
            per_page.unwrap_or_else(|| settings.per_page()),
        ),
        Command::ValidateEmail { email } => {
            if validate_email(email) {
                format!("{email}: valid")
            } else {
                format!("{email}: invalid")
            }
        }
        Command::ProcessUser { json } => {
            let record: Value =
                serde_json::from_str(json).map_err(|err| CliError::InvalidJson {
                    message: err.to_string(),
                })?;
            let user = process_user_data(&record)?;
            format!(
                "formatted_name: {}\nemail_domain: {}\nage_group: {}",
                user.formatted_name, user.email_domain, user.age_group
            )
        }
        Command::Calc { first, steps } => run_calculator(*first, steps)?,
    };
    Ok(output)
}

fn run_calculator(first: f64, steps: &[(Operator, f64)]) -> Result<String, CliError> {
    let mut calculator = Calculator::<f64>::new();
    let result = steps
        .iter()
        .try_fold(first, |acc, &(operator, operand)| {
            calculator.apply(operator, acc, operand)
        })?;
    let mut lines = calculator.history();
    lines.push(format!("result: {result}"));
    Ok(lines.join("\n"))
}

fn parse_users_url<I>(args: &mut I) -> Result<Command, CliError>
where
    I: Iterator<Item = String>,
{
    let mut page = None;
    let mut per_page = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--page" => page = Some(next_number(args, "--page")?),
            "--per-page" => per_page = Some(next_number(args, "--per-page")?),
            _ => return Err(CliError::UnexpectedArgument { value: arg }),
        }
    }
    Ok(Command::UsersUrl { page, per_page })
}

fn parse_calc<I>(args: &mut I) -> Result<Command, CliError>
where
    I: Iterator<Item = String>,
{
    let first = next_number(args, "<a>")?;
    let mut steps = Vec::new();
    while let Some(symbol) = args.next() {
        let operator =
            Operator::from_symbol(&symbol).ok_or(CliError::UnknownOperator { value: symbol })?;
        let operand = next_number(args, "<b>")?;
        steps.push((operator, operand));
    }
    if steps.is_empty() {
        return Err(CliError::MissingValue { name: "<op>" });
    }
    Ok(Command::Calc { first, steps })
}

fn next_value<I>(args: &mut I, name: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { name })
}

fn next_number<I, T>(args: &mut I, name: &'static str) -> Result<T, CliError>
where
    I: Iterator<Item = String>,
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let value = next_value(args, name)?;
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        name,
        message: err.to_string(),
        value,
    })
}
