// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) content-line formatter.
//!
//! The formatter wraps any `std::io::Write` implementer, terminates every
//! content line with CRLF and optionally folds long lines.
//!
//! # Example
//!
//! ```
//! use birthdaymd_ical::{FormatOptions, Formatter};
//! use birthdaymd_ical::formatter::property::write_text_prop;
//!
//! let mut buffer = Vec::new();
//! let mut f = Formatter::new(&mut buffer, FormatOptions::default());
//! f.with_block("VCALENDAR", |f| write_text_prop(f, "VERSION", "2.0"))?;
//! assert_eq!(buffer, b"BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n");
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod property;

use std::io::{self, Write};

use crate::keyword::{KW_BEGIN, KW_END};

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `None`, every property stays on a single line.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl FormatOptions {
    /// Line length recommended by RFC 5545 Section 3.1.
    pub const RFC_LINE_LENGTH: usize = 75;

    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    #[must_use]
    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Both SPACE and TAB are 1 byte.
    const CONTINUATION_LEN: usize = 1;
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// Bytes written through the `Write` impl belong to the current content line;
/// [`Formatter::writeln`] terminates it.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
    /// The last byte written opened a `\x` escape sequence.
    in_escape: bool,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
            in_escape: false,
        }
    }

    /// Write a CRLF line ending.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.line_length = 0;
        self.in_escape = false;
        Ok(())
    }

    /// Write `BEGIN:<name>`, the content produced by `write_content`, then `END:<name>`.
    ///
    /// # Errors
    /// Returns an error if writing fails or `write_content` fails.
    pub fn with_block<F>(&mut self, name: &str, write_content: F) -> io::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        self.write_begin_block(name)?;
        write_content(self)?;
        self.write_end_block(name)
    }

    /// Write a `BEGIN:<name>` line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_begin_block(&mut self, name: &str) -> io::Result<()> {
        write!(self, "{KW_BEGIN}:{name}")?;
        self.writeln()
    }

    /// Write an `END:<name>` line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_end_block(&mut self, name: &str) -> io::Result<()> {
        write!(self, "{KW_END}:{name}")?;
        self.writeln()
    }

    /// Insert line folding: CRLF + whitespace.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = FoldingStyle::CONTINUATION_LEN;
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            // Folding disabled, write directly
            return self.writer.write(buf);
        };

        let mut remaining = buf;
        while !remaining.is_empty() {
            let room = max_len.saturating_sub(self.line_length);
            let mut n = find_safe_write_length(remaining, room);

            // Keep `\x` escape pairs on the same line
            if n > 0 && n < remaining.len() && escape_state(self.in_escape, remaining.split_at(n).0)
            {
                n -= 1;
            }

            if n == 0 {
                if self.line_length > FoldingStyle::CONTINUATION_LEN && !self.in_escape {
                    self.insert_fold()?;
                    continue;
                }
                // Finishing an escape sequence or nothing fits even on a fresh
                // continuation line, write one char anyway
                n = char_length(remaining);
            }

            let (chunk, rest) = remaining.split_at(n);
            self.writer.write_all(chunk)?;
            self.line_length += n;
            self.in_escape = escape_state(self.in_escape, chunk);
            remaining = rest;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

const fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Find the maximum number of bytes we can write without breaking a UTF-8 sequence.
fn find_safe_write_length(buf: &[u8], max_bytes: usize) -> usize {
    if max_bytes >= buf.len() {
        return buf.len();
    }

    let mut pos = max_bytes;
    while pos > 0 && buf.get(pos).copied().is_some_and(is_continuation_byte) {
        pos -= 1;
    }
    pos
}

/// Length of the UTF-8 sequence starting at `buf[0]`.
fn char_length(buf: &[u8]) -> usize {
    let tail = buf
        .iter()
        .skip(1)
        .take_while(|&&b| is_continuation_byte(b))
        .count();
    1 + tail
}

fn escape_state(mut in_escape: bool, bytes: &[u8]) -> bool {
    for &byte in bytes {
        in_escape = !in_escape && byte == b'\\';
    }
    in_escape
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(line: &str, max: usize) -> String {
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default().folding(Some(max)));
        write!(f, "{line}").unwrap();
        f.writeln().unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn unfold(s: &str) -> String {
        s.replace("\r\n ", "").replace("\r\n\t", "")
    }

    #[test]
    fn writes_crlf_without_folding() {
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        write!(f, "SUMMARY:{}", "x".repeat(200)).unwrap();
        f.writeln().unwrap();

        let out = String::from_utf8(buffer).unwrap();
        assert_eq!(out.len(), "SUMMARY:".len() + 200 + 2);
        assert!(out.ends_with("\r\n"));
        assert_eq!(out.matches("\r\n").count(), 1);
    }

    #[test]
    fn with_block_wraps_content() {
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        f.with_block("VEVENT", |f| {
            write!(f, "UID:1")?;
            f.writeln()
        })
        .unwrap();
        assert_eq!(buffer, b"BEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\n");
    }

    #[test]
    fn folds_long_lines() {
        let line = format!("SUMMARY:{}", "a".repeat(150));
        let out = fold(&line, 75);

        for physical in out.split("\r\n").filter(|a| !a.is_empty()) {
            assert!(physical.len() <= 75, "line too long: {physical:?}");
        }
        assert!(out.contains("\r\n "));
        assert_eq!(unfold(&out), format!("{line}\r\n"));
    }

    #[test]
    fn short_lines_are_not_folded() {
        assert_eq!(fold("UID:abc", 75), "UID:abc\r\n");
    }

    #[test]
    fn folding_keeps_utf8_sequences_intact() {
        let line = format!("SUMMARY:{}", "ü".repeat(60));
        let out = fold(&line, 75);

        for physical in out.split("\r\n").filter(|a| !a.is_empty()) {
            assert!(physical.len() <= 75);
        }
        assert_eq!(unfold(&out), format!("{line}\r\n"));
    }

    #[test]
    fn folding_keeps_escape_pairs_together() {
        // 74 bytes of prefix leaves the backslash as the last byte of the line
        let line = format!("{}\\,tail", "a".repeat(74));
        let out = fold(&line, 75);

        let first = out.split("\r\n").next().unwrap();
        assert!(!first.ends_with('\\'));
        assert_eq!(unfold(&out), format!("{line}\r\n"));
    }

    #[test]
    fn folding_with_tab_style() {
        let mut buffer = Vec::new();
        let options = FormatOptions::default()
            .folding(Some(10))
            .folding_style(FoldingStyle::Tab);
        let mut f = Formatter::new(&mut buffer, options);
        write!(f, "0123456789ABCDEF").unwrap();
        f.writeln().unwrap();
        assert_eq!(buffer, b"0123456789\r\n\tABCDEF\r\n");
    }
}
