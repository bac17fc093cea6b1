// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatting as defined in RFC 5545 Section 3.3.

use std::borrow::Cow;
use std::io::{self, Write};

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

/// Format a date value as `YYYYMMDD`.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_date<W: Write>(w: &mut W, date: Date) -> io::Result<()> {
    write!(w, "{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Format a timestamp as a UTC date-time, `YYYYMMDDTHHMMSSZ`.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_utc_date_time<W: Write>(w: &mut W, timestamp: Timestamp) -> io::Result<()> {
    let dt = timestamp.to_zoned(TimeZone::UTC).datetime();
    write_date(w, dt.date())?;
    write!(w, "T{:02}{:02}{:02}Z", dt.hour(), dt.minute(), dt.second())
}

/// Escape TEXT per RFC 5545 Section 3.3.11.
///
/// Backslash, semicolon, comma and newline are escaped, CR is dropped.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', ';', ',', '\n', '\r']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {} // Skip CR characters
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_format_date() {
        let mut buffer = Vec::new();
        write_date(&mut buffer, date(1997, 7, 4)).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "19970704");
    }

    #[test]
    fn test_format_date_pads_year() {
        let mut buffer = Vec::new();
        write_date(&mut buffer, date(812, 1, 1)).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "08120101");
    }

    #[test]
    fn test_format_utc_date_time() {
        let ts: Timestamp = "2024-12-31T23:05:09+02:00".parse().unwrap();
        let mut buffer = Vec::new();
        write_utc_date_time(&mut buffer, ts).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "20241231T210509Z");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Jane Doe"), "Jane Doe");
        assert!(matches!(escape_text("Jane Doe"), Cow::Borrowed(_)));
        assert_eq!(escape_text(r"a\b"), r"a\\b");
        assert_eq!(escape_text("Doe, Jane; Jr."), r"Doe\, Jane\; Jr.");
        assert_eq!(escape_text("line\r\nbreak"), r"line\nbreak");
    }
}
