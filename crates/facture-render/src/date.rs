//! French long-form invoice date.
//!
//! The invoice always prints dates like `vendredi 16 octobre 2026`, whatever
//! the locale of the machine producing it.

use std::fmt;

use chrono::{DateTime, Locale, TimeZone};

const LONG_DATE: &str = "%A %-d %B %Y";

/// Weekday, day, month and year in French, all lowercase.
pub fn french_long_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    now.format_localized(LONG_DATE, Locale::fr_FR).to_string()
}
