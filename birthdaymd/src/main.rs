// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! birthday.md - convert a plain-text birthday list into an iCalendar file

use std::process::ExitCode;

fn main() -> ExitCode {
    birthdaymd_cli::run()
}
