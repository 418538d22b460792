//! RFC 822 and RFC 3339 date generation.
//!
//! Generators accept either an instant or a date string. Strings are parsed
//! leniently: RFC 3339, then RFC 2822, then a handful of ISO-like layouts
//! without an offset (read as UTC).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// `Wed, 17 May 2023 15:02:07 GMT`
const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// `2023-05-17T15:02:07.123Z`
const RFC3339_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Layouts without an offset.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date as handed to the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    Instant(DateTime<Utc>),
    Text(String),
}

impl DateLike {
    /// Resolve to an instant, parsing text when needed.
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            DateLike::Instant(instant) => Some(*instant),
            DateLike::Text(text) => parse_date_like(text),
        }
    }
}

impl From<DateTime<Utc>> for DateLike {
    fn from(value: DateTime<Utc>) -> Self {
        DateLike::Instant(value)
    }
}

impl From<DateTime<FixedOffset>> for DateLike {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateLike::Instant(value.with_timezone(&Utc))
    }
}

impl From<&str> for DateLike {
    fn from(value: &str) -> Self {
        DateLike::Text(value.to_string())
    }
}

impl From<String> for DateLike {
    fn from(value: String) -> Self {
        DateLike::Text(value)
    }
}

/// Parse a date string into a UTC instant.
///
/// Returns `None` for blank or unrecognized input.
pub fn parse_date_like(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Format as an RFC 822 date in GMT. Sub-second precision is dropped.
pub fn generate_rfc822_date(value: Option<&DateLike>) -> Option<String> {
    let instant = value?.to_instant()?;
    Some(instant.format(RFC822_FORMAT).to_string())
}

/// Format as an RFC 3339 UTC timestamp with millisecond precision.
pub fn generate_rfc3339_date(value: Option<&DateLike>) -> Option<String> {
    let instant = value?.to_instant()?;
    Some(instant.format(RFC3339_FORMAT).to_string())
}
