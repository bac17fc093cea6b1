// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

/// Errors that abort a conversion.
///
/// Per-line problems in the input are not errors, see [`crate::Diagnostic`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be opened.
    #[error("failed to open file {}: {source}", path.display())]
    Open {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Reading the input failed part way through.
    #[error("error reading file: {0}")]
    Read(#[source] io::Error),

    /// The output file could not be created.
    #[error("failed to create output file {}: {source}", path.display())]
    Create {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing part of the calendar failed.
    #[error("failed to write {target}: {source}")]
    Write {
        /// What was being written.
        target: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The event date of a birthday is out of range.
    #[error("failed to generate event for {name}: {source}")]
    Event {
        /// Name of the birthday.
        name: String,
        /// Underlying date error.
        source: jiff::Error,
    },
}
