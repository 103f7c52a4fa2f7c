//! Command-line front end for the sample-kit helpers.
//!
//! This binary delegates to `sample_kit::cli` for parsing and execution,
//! keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use sample_kit::UserApiSettings;
use sample_kit::cli::{CliError, ParseOutcome, USAGE, execute, parse_args};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            write_stdout(USAGE.trim_end());
            Ok(())
        }
        ParseOutcome::Command(command) => {
            let settings = load_settings()?;
            let output = execute(&command, &settings)?;
            write_stdout(&output);
            Ok(())
        }
    }
}

fn load_settings() -> Result<UserApiSettings, CliError> {
    // Command arguments are parsed separately; only defaults, config files
    // and the environment feed the settings.
    UserApiSettings::load_from_iter([OsString::from(env!("CARGO_BIN_NAME"))]).map_err(|err| {
        CliError::Settings {
            message: err.to_string(),
        }
    })
}

fn write_stdout(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
