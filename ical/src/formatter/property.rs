// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting for the iCalendar properties birthday calendars use.

use std::io::{self, Write};

use jiff::Timestamp;
use jiff::civil::Date;

use crate::formatter::Formatter;
use crate::keyword::{KW_RRULE, KW_RRULE_FREQ, KW_VALUE, KW_VALUE_DATE};
use crate::value::{write_date, write_utc_date_time};

/// Write `NAME:value` with the value taken verbatim.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_text_prop<W: Write>(f: &mut Formatter<W>, name: &str, value: &str) -> io::Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()
}

/// Write `NAME;VALUE=DATE:YYYYMMDD`.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_date_prop<W: Write>(f: &mut Formatter<W>, name: &str, date: Date) -> io::Result<()> {
    write!(f, "{name};{KW_VALUE}={KW_VALUE_DATE}:")?;
    write_date(f, date)?;
    f.writeln()
}

/// Write `NAME:YYYYMMDDTHHMMSSZ`.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_utc_prop<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    timestamp: Timestamp,
) -> io::Result<()> {
    write!(f, "{name}:")?;
    write_utc_date_time(f, timestamp)?;
    f.writeln()
}

/// Write `RRULE:FREQ=<frequency>`.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_prop_rrule<W: Write>(f: &mut Formatter<W>, frequency: &str) -> io::Result<()> {
    write!(f, "{KW_RRULE}:{KW_RRULE_FREQ}={frequency}")?;
    f.writeln()
}
