// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use birthdaymd_ical::formatter::property::{
    write_date_prop, write_prop_rrule, write_text_prop, write_utc_prop,
};
use birthdaymd_ical::keyword::{
    KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_CATEGORIES, KW_DTSTAMP, KW_DTSTART, KW_METHOD,
    KW_METHOD_PUBLISH, KW_PRODID, KW_RRULE_FREQ_YEARLY, KW_SUMMARY, KW_TRANSP,
    KW_TRANSP_TRANSPARENT, KW_UID, KW_VCALENDAR, KW_VERSION, KW_VERSION_2_0, KW_VEVENT,
};
use birthdaymd_ical::{FormatOptions, Formatter, escape_text};
use jiff::Timestamp;
use jiff::civil::Date;

use crate::{Birthday, CalendarOptions, Clock, Error, SystemClock};

const CATEGORY_BIRTHDAY: &str = "Birthday";

/// Writes birthdays as an iCalendar document with one yearly all-day event each.
#[derive(Debug, Clone)]
pub struct Generator<C: Clock = SystemClock> {
    options: CalendarOptions,
    clock: C,
}

impl<C: Clock> Generator<C> {
    /// Create a generator reading the current time from `clock`.
    pub fn new(options: CalendarOptions, clock: C) -> Self {
        Self { options, clock }
    }

    /// Create (or truncate) the file at `path` and write the calendar into it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written. A partially
    /// written file is left in place.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn generate_file(&self, path: &Path, birthdays: &[Birthday]) -> Result<(), Error> {
        let file = File::create(path).map_err(|source| Error::Create {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_calendar(BufWriter::new(file), birthdays)
    }

    /// Write the calendar to a string.
    ///
    /// # Errors
    /// Returns an error if an event date is out of range.
    pub fn generate_to_string(&self, birthdays: &[Birthday]) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.write_calendar(&mut buffer, birthdays)?;
        String::from_utf8(buffer).map_err(|e| Error::Write {
            target: "calendar".to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }

    /// Stream the header, one event per birthday in order, then the footer,
    /// and flush `writer`.
    ///
    /// # Errors
    /// Returns an error if writing fails or an event date is out of range.
    pub fn write_calendar<W: Write>(
        &self,
        writer: W,
        birthdays: &[Birthday],
    ) -> Result<(), Error> {
        let now = self.clock.now();
        let stamp = now.timestamp();
        let current_year = now.year();
        tracing::debug!(count = birthdays.len(), %stamp, "writing calendar");

        let options = FormatOptions::default()
            .folding(self.options.fold_lines.then_some(FormatOptions::RFC_LINE_LENGTH));
        let mut f = Formatter::new(writer, options);

        self.write_header(&mut f)
            .map_err(|source| write_error("ICS header", source))?;

        for birthday in birthdays {
            let date = birthday
                .effective_date(current_year)
                .map_err(|source| Error::Event {
                    name: birthday.name().to_string(),
                    source,
                })?;

            self.write_event(&mut f, birthday, date, stamp)
                .map_err(|source| {
                    write_error(&format!("event for {}", birthday.name()), source)
                })?;
        }

        f.write_end_block(KW_VCALENDAR)
            .and_then(|()| f.flush())
            .map_err(|source| write_error("ICS footer", source))
    }

    fn write_header<W: Write>(&self, f: &mut Formatter<W>) -> io::Result<()> {
        f.write_begin_block(KW_VCALENDAR)?;
        write_text_prop(f, KW_VERSION, KW_VERSION_2_0)?;
        let prod_id = format!("-//{}//NONSGML v1.0//EN", self.options.product_id);
        write_text_prop(f, KW_PRODID, &prod_id)?;
        write_text_prop(f, KW_CALSCALE, KW_CALSCALE_GREGORIAN)?;
        write_text_prop(f, KW_METHOD, KW_METHOD_PUBLISH)
    }

    fn write_event<W: Write>(
        &self,
        f: &mut Formatter<W>,
        birthday: &Birthday,
        date: Date,
        stamp: Timestamp,
    ) -> io::Result<()> {
        let name = if self.options.escape_text {
            escape_text(birthday.name())
        } else {
            Cow::Borrowed(birthday.name())
        };

        f.with_block(KW_VEVENT, |f| {
            write_text_prop(f, KW_UID, &birthday.uid(&self.options.uid_domain))?;
            write_utc_prop(f, KW_DTSTAMP, stamp)?;
            write_date_prop(f, KW_DTSTART, date)?;
            write_text_prop(f, KW_TRANSP, KW_TRANSP_TRANSPARENT)?;
            write_text_prop(f, KW_SUMMARY, &format!("{name}'s Birthday"))?;
            write_prop_rrule(f, KW_RRULE_FREQ_YEARLY)?;
            write_text_prop(f, KW_CATEGORIES, CATEGORY_BIRTHDAY)
        })
    }
}

fn write_error(target: &str, source: io::Error) -> Error {
    Error::Write {
        target: target.to_string(),
        source,
    }
}
