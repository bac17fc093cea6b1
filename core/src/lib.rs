// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Turn a hand-maintained birthday list into an iCalendar document.
//!
//! The pipeline has two stages: [`parser`] classifies input lines and extracts
//! [`Birthday`] records while collecting per-line [`Diagnostic`]s, and
//! [`Generator`] writes one yearly all-day event per record.

mod birthday;
mod clock;
mod config;
mod error;
mod generator;
pub mod parser;

pub use crate::birthday::Birthday;
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::{APP_NAME, CalendarOptions};
pub use crate::error::Error;
pub use crate::generator::Generator;
pub use crate::parser::{
    Diagnostic, EntryError, LineKind, Parsed, parse_file, parse_reader, parse_str,
};
