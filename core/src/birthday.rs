// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::Span;
use jiff::civil::Date;

/// A person's birthday, with or without the year of birth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    name: String,
    day: i8,
    month: i8,
    year: Option<i16>,
}

impl Birthday {
    /// Create a new birthday.
    ///
    /// The day is not checked against the length of the month, the parser only
    /// guarantees `1..=31` and `1..=12`.
    pub fn new(name: impl Into<String>, day: i8, month: i8, year: Option<i16>) -> Self {
        Self {
            name: name.into(),
            day,
            month,
            year,
        }
    }

    /// The display name, as written after the date.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Day of the month, 1-31.
    #[must_use]
    pub fn day(&self) -> i8 {
        self.day
    }

    /// Month, 1-12.
    #[must_use]
    pub fn month(&self) -> i8 {
        self.month
    }

    /// Year of birth, if known.
    #[must_use]
    pub fn year(&self) -> Option<i16> {
        self.year
    }

    /// Whether the year of birth is known.
    #[must_use]
    pub fn has_year(&self) -> bool {
        self.year.is_some()
    }

    /// The date of the first occurrence of the birthday event.
    ///
    /// Uses `current_year` when the year of birth is unknown. A day past the end
    /// of the month rolls over into the next one, so `30.02.` lands in March.
    ///
    /// # Errors
    /// Returns an error if the resulting date is outside the supported range.
    pub fn effective_date(&self, current_year: i16) -> Result<Date, jiff::Error> {
        let year = self.year.unwrap_or(current_year);
        Date::new(year, self.month, 1)?.checked_add(Span::new().days(i64::from(self.day) - 1))
    }

    /// Deterministic identifier: `birthday-<DDMM>-<name>@<domain>`, spaces in
    /// the name become underscores.
    #[must_use]
    pub fn uid(&self, domain: &str) -> String {
        format!(
            "birthday-{:02}{:02}-{}@{domain}",
            self.day,
            self.month,
            self.name.replace(' ', "_")
        )
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:02}.{:02}.{year:04} {}", self.day, self.month, self.name),
            None => write!(f, "{:02}.{:02}. {}", self.day, self.month, self.name),
        }
    }
}
