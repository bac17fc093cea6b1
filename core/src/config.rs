// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

/// The name of the application.
pub const APP_NAME: &str = "birthday-md";

/// Options controlling the generated calendar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    /// Product identifier placed in `PRODID:-//<product_id>//NONSGML v1.0//EN`.
    pub product_id: String,

    /// Domain part of every event UID.
    pub uid_domain: String,

    /// Escape `\`, `;`, `,` and newlines in the event summary.
    pub escape_text: bool,

    /// Fold content lines longer than 75 octets.
    pub fold_lines: bool,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            product_id: "github.com/cahfofpai/birthday.md".to_string(),
            uid_domain: APP_NAME.to_string(),
            escape_text: false,
            fold_lines: false,
        }
    }
}
