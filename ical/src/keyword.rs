// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

/// Opens a component block.
pub const KW_BEGIN: &str = "BEGIN";
/// Closes a component block.
pub const KW_END: &str = "END";

/// Calendar object component.
pub const KW_VCALENDAR: &str = "VCALENDAR";
/// Event component.
pub const KW_VEVENT: &str = "VEVENT";

// Section 3.2 - Property Parameters
/// Value data type parameter.
pub const KW_VALUE: &str = "VALUE";
/// `DATE` value type.
pub const KW_VALUE_DATE: &str = "DATE";

// Section 3.7 - Calendar Properties
/// Calendar scale property.
pub const KW_CALSCALE: &str = "CALSCALE";
/// Gregorian calendar scale.
pub const KW_CALSCALE_GREGORIAN: &str = "GREGORIAN";
/// iTIP method property.
pub const KW_METHOD: &str = "METHOD";
/// `PUBLISH` method.
pub const KW_METHOD_PUBLISH: &str = "PUBLISH";
/// Product identifier property.
pub const KW_PRODID: &str = "PRODID";
/// iCalendar version property.
pub const KW_VERSION: &str = "VERSION";
/// Version of RFC 5545.
pub const KW_VERSION_2_0: &str = "2.0";

// Section 3.8 - Component Properties
/// Categories property.
pub const KW_CATEGORIES: &str = "CATEGORIES";
/// Date-time stamp property.
pub const KW_DTSTAMP: &str = "DTSTAMP";
/// Start date property.
pub const KW_DTSTART: &str = "DTSTART";
/// Recurrence rule property.
pub const KW_RRULE: &str = "RRULE";
/// Summary property.
pub const KW_SUMMARY: &str = "SUMMARY";
/// Time transparency property.
pub const KW_TRANSP: &str = "TRANSP";
/// Does not block time.
pub const KW_TRANSP_TRANSPARENT: &str = "TRANSPARENT";
/// Unique identifier property.
pub const KW_UID: &str = "UID";

// Section 3.3.10 - Recurrence Rule
/// Recurrence frequency rule part.
pub const KW_RRULE_FREQ: &str = "FREQ";
/// Yearly frequency.
pub const KW_RRULE_FREQ_YEARLY: &str = "YEARLY";
