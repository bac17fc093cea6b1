// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Write iCalendar (RFC 5545) documents line by line.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![deny(missing_docs)]

pub mod formatter;
pub mod keyword;
pub mod value;

pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter};
pub use crate::value::escape_text;
