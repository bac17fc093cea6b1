// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use birthdaymd_core::{APP_NAME, Diagnostic, Generator, SystemClock, parse_file};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;

use crate::config::parse_config;

/// Command-line interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Birthday list to read
    pub input: PathBuf,

    /// Calendar file to write
    pub output: PathBuf,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Convert a plain-text birthday list into an iCalendar file.")
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                arg!(-c --config <CONFIG> "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $BIRTHDAY_MD_CONFIG, then \
$XDG_CONFIG_HOME/birthday-md/config.toml on Linux and MacOS, \
%APPDATA%/birthday-md/config.toml on Windows.",
                    )
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(<INPUT> "Birthday list to read")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(<OUTPUT> "Calendar file to write")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    /// Parse the specified arguments
    ///
    /// # Errors
    /// Returns the clap error for help, version and invalid arguments.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from(&matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        let (Some(input), Some(output)) = (
            matches.get_one::<PathBuf>("INPUT"),
            matches.get_one::<PathBuf>("OUTPUT"),
        ) else {
            unreachable!("positional arguments are required")
        };

        Self {
            config: matches.get_one("config").cloned(),
            input: input.clone(),
            output: output.clone(),
        }
    }

    /// The short usage shown when the arguments are wrong.
    pub fn usage() -> String {
        format!(
            "Syntax: {APP_NAME} <input file> <output file>\n\n\
             Example: {APP_NAME} birthdays.md birthdays.ics\n"
        )
    }

    /// Print [`Cli::usage`] to stdout.
    pub fn print_usage() {
        print!("{}", Self::usage());
    }

    /// Convert the input file and write the calendar.
    ///
    /// Problems on single lines are printed as warnings and do not fail the run.
    ///
    /// # Errors
    /// Returns an error if the input is missing or unreadable, the configuration
    /// is invalid, or the output cannot be written.
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting birthday list...");
        if !self.input.exists() {
            return Err(format!("Input file '{}' does not exist", self.input.display()).into());
        }

        let config = parse_config(self.config)?;

        let parsed = parse_file(&self.input)?;
        for diagnostic in &parsed.diagnostics {
            eprintln!("{}", warning_line(diagnostic));
        }

        let generator = Generator::new(config.calendar, SystemClock);
        generator.generate_file(&self.output, &parsed.birthdays)?;

        println!(
            "Successfully converted {} birthdays to ICS format.",
            parsed.birthdays.len()
        );
        println!("Output written to: {}", self.output.display());
        Ok(())
    }
}

fn warning_line(diagnostic: &Diagnostic) -> String {
    format!("{} {diagnostic}", "Warning:".yellow())
}
