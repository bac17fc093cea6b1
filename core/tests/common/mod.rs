// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - A frozen clock for deterministic output
//! - Temporary directory management with auto-cleanup

use std::path::PathBuf;

use birthdaymd_core::{CalendarOptions, FixedClock, Generator};
use jiff::Zoned;
use tempfile::TempDir;

/// A generator whose clock is frozen at 2025-06-01 12:00:00 UTC.
pub fn test_generator() -> Generator<FixedClock> {
    let now: Zoned = "2025-06-01T12:00:00+00:00[+00:00]".parse().unwrap();
    Generator::new(CalendarOptions::default(), FixedClock::new(now))
}

/// A temporary directory holding an input file with `content`.
///
/// Returns the directory guard, the input path and an output path next to it.
pub fn setup_input(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("birthdays.md");
    let output = dir.path().join("birthdays.ics");
    std::fs::write(&input, content).unwrap();
    (dir, input, output)
}
