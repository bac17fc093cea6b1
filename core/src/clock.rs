// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;

/// Source of the current time for calendar generation.
pub trait Clock {
    /// The current instant, in the time zone whose civil year applies to
    /// birthdays without a year.
    fn now(&self) -> Zoned;
}

/// Reads the system clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock(Zoned);

impl FixedClock {
    /// Create a clock frozen at `now`.
    #[must_use]
    pub fn new(now: Zoned) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.0.clone()
    }
}
