// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Line classifier and birthday entry parser.
//!
//! Input is line oriented. Every line is one of:
//!
//! ```txt
//! (blank)                      ignored
//! # Heading                    ignored
//! <!-- comment -->             ignored
//! DD.MM.YYYY Name              birthday with year
//! DD.MM. Name                  birthday without year
//! anything else                reported, then skipped
//! ```
//!
//! Day and month take one or two digits, the year exactly four. A bad line
//! never stops the parse, it yields a [`Diagnostic`] instead of a record.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::{Birthday, Error};

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Starts with `#`.
    Heading,
    /// `<!-- ... -->` on a single line.
    Comment,
    /// `DD.MM.YYYY Name`
    BirthdayWithYear,
    /// `DD.MM. Name`
    BirthdayWithoutYear,
    /// Matches none of the above.
    Invalid,
}

impl LineKind {
    /// Classify a line. The checks run in declaration order and the first
    /// match wins.
    #[must_use]
    pub fn classify(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Self::Blank
        } else if line.starts_with('#') {
            Self::Heading
        } else if line.starts_with("<!--") && line.ends_with("-->") {
            Self::Comment
        } else if with_year_regex().is_match(line) {
            Self::BirthdayWithYear
        } else if without_year_regex().is_match(line) {
            Self::BirthdayWithoutYear
        } else {
            Self::Invalid
        }
    }
}

fn with_year_regex() -> &'static Regex {
    const RE: &str = r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}\s+.+$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).unwrap())
}

fn without_year_regex() -> &'static Regex {
    const RE: &str = r"^[0-9]{1,2}\.[0-9]{1,2}\.\s+.+$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).unwrap())
}

/// Why a line did not produce a birthday.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// The line is not blank, a heading, a comment or a birthday.
    #[error("Invalid line format: {0}")]
    InvalidLineFormat(String),

    /// The line has no name after the date.
    #[error("invalid birthday format: {0}")]
    InvalidBirthdayFormat(String),

    /// The date has the wrong number of segments.
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    /// The day is not a number or outside 1-31.
    #[error("invalid day: {0}")]
    InvalidDay(String),

    /// The month is not a number or outside 1-12.
    #[error("invalid month: {0}")]
    InvalidMonth(String),

    /// The year is not a number.
    #[error("invalid year: {0}")]
    InvalidYear(String),
}

/// A non-fatal problem found on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// What went wrong.
    pub error: EntryError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.error)
    }
}

/// Result of parsing a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// Birthdays in file order.
    pub birthdays: Vec<Birthday>,
    /// One entry per skipped line, in file order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    /// Classify one line and record its birthday or diagnostic.
    fn push_line(&mut self, number: usize, line: &str) {
        let result = match LineKind::classify(line) {
            LineKind::Blank | LineKind::Heading | LineKind::Comment => return,
            LineKind::BirthdayWithYear => parse_entry(line, true),
            LineKind::BirthdayWithoutYear => parse_entry(line, false),
            LineKind::Invalid => Err(EntryError::InvalidLineFormat(line.to_string())),
        };

        match result {
            Ok(birthday) => self.birthdays.push(birthday),
            Err(error) => {
                tracing::debug!(line = number, %error, "skipping line");
                self.diagnostics.push(Diagnostic {
                    line: number,
                    error,
                });
            }
        }
    }
}

/// Parse a birthday line, `DD.MM.YYYY Name` if `has_year`, `DD.MM. Name` otherwise.
///
/// # Errors
/// Returns the first problem found in the line.
pub fn parse_entry(line: &str, has_year: bool) -> Result<Birthday, EntryError> {
    let line = line.trim();
    let Some((date, name)) = line.split_once(char::is_whitespace) else {
        return Err(EntryError::InvalidBirthdayFormat(line.to_string()));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(EntryError::InvalidBirthdayFormat(line.to_string()));
    }

    // `DD.MM.` carries a trailing dot that does not start another segment
    let segments: Vec<&str> = date.strip_suffix('.').unwrap_or(date).split('.').collect();
    let (day, month, year) = match (has_year, segments.as_slice()) {
        (true, [day, month, year]) => (*day, *month, Some(*year)),
        (false, [day, month]) => (*day, *month, None),
        _ => return Err(EntryError::InvalidDateFormat(date.to_string())),
    };

    let day: i8 = day
        .parse()
        .map_err(|_| EntryError::InvalidDay(day.to_string()))?;
    let month: i8 = month
        .parse()
        .map_err(|_| EntryError::InvalidMonth(month.to_string()))?;
    let year: Option<i16> = year
        .map(|a| a.parse().map_err(|_| EntryError::InvalidYear(a.to_string())))
        .transpose()?;

    if !(1..=31).contains(&day) {
        return Err(EntryError::InvalidDay(day.to_string()));
    }
    if !(1..=12).contains(&month) {
        return Err(EntryError::InvalidMonth(month.to_string()));
    }

    Ok(Birthday::new(name, day, month, year))
}

/// Parse a document held in memory.
#[must_use]
pub fn parse_str(content: &str) -> Parsed {
    let mut parsed = Parsed::default();
    for (i, line) in content.lines().enumerate() {
        parsed.push_line(i + 1, line);
    }
    parsed
}

/// Parse a document from a reader.
///
/// # Errors
/// Returns [`Error::Read`] if reading fails, including on invalid UTF-8.
/// Nothing parsed so far is returned in that case.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Parsed, Error> {
    let mut parsed = Parsed::default();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::Read)?;
        parsed.push_line(i + 1, &line);
    }
    Ok(parsed)
}

/// Parse the document at `path`.
///
/// # Errors
/// Returns [`Error::Open`] if the file cannot be opened and [`Error::Read`] if
/// reading it fails.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn parse_file(path: &Path) -> Result<Parsed, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_reader(BufReader::new(file))?;
    tracing::debug!(
        birthdays = parsed.birthdays.len(),
        diagnostics = parsed.diagnostics.len(),
        "parsed birthday list"
    );
    Ok(parsed)
}
