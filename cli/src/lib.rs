// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of birthday.md.

mod cli;
mod config;

use std::ffi::OsString;
use std::fmt::Display;
use std::io::IsTerminal;
use std::process::ExitCode;

use clap::error::ErrorKind;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub use crate::cli::Cli;
pub use crate::config::{Config, parse_config};

/// Run the birthday.md command-line interface.
pub fn run() -> ExitCode {
    init_tracing();

    // `colored` only looks at stdout, but every colored line goes to stderr
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    run_from(std::env::args_os())
}

/// Parse `args` and run the conversion, returning the process exit code.
///
/// Invalid arguments print the short usage to stdout and fail; `--help` and
/// `--version` print their text and exit the process.
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!(error = %e, "invalid arguments");
            Cli::print_usage();
            return ExitCode::FAILURE;
        }
    };

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

fn error_line(error: &dyn Display) -> String {
    format!("{} {error}", "Error:".red())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
