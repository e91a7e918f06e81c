//! Filter values, record targets and sort values.
//!
//! Backend records carry optional fields (null timestamps, missing names).
//! The conversions here are the single place where a missing or malformed
//! field is turned into the value filters and comparators work with:
//!
//! | Field | Missing / malformed becomes |
//! |-------|-----------------------------|
//! | text | `""` |
//! | timestamp (sorting) | epoch `0` |
//! | timestamp (date filters) | no match |
//! | duration | `0` |

use super::schema::FilterKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::borrow::Cow;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current value of one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Exact, substring and role filters. Empty means inactive.
    Text(String),

    /// Date-range bound. `None` means inactive.
    Date(Option<NaiveDate>),

    /// Integer id. `None` means inactive.
    Id(Option<i64>),
}

impl FilterValue {
    /// The inactive value for a field kind.
    pub fn default_for(kind: FilterKind) -> Self {
        match kind {
            FilterKind::DateFrom | FilterKind::DateTo => FilterValue::Date(None),
            FilterKind::Id => FilterValue::Id(None),
            FilterKind::Exact | FilterKind::Contains | FilterKind::Role { .. } => {
                FilterValue::Text(String::new())
            }
        }
    }

    /// Coerce user input into the value type of a field kind.
    ///
    /// Never fails: unparsable dates and ids become the inactive value.
    pub fn coerce(kind: FilterKind, raw: &str) -> Self {
        match kind {
            FilterKind::DateFrom | FilterKind::DateTo => {
                FilterValue::Date(NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
            }
            FilterKind::Id => FilterValue::Id(raw.trim().parse().ok()),
            FilterKind::Exact | FilterKind::Contains | FilterKind::Role { .. } => {
                FilterValue::Text(raw.to_string())
            }
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Text(s) => !s.is_empty(),
            FilterValue::Date(d) => d.is_some(),
            FilterValue::Id(n) => n.is_some(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Date(Some(d)) => write!(f, "{}", d.format(DATE_FORMAT)),
            FilterValue::Id(Some(n)) => write!(f, "{}", n),
            FilterValue::Date(None) | FilterValue::Id(None) => Ok(()),
        }
    }
}

/// The value a record exposes to one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<'a> {
    /// A single string, missing values already defaulted to `""`.
    Text(Cow<'a, str>),

    /// Several strings; the filter matches if any of them does.
    Texts(Vec<&'a str>),

    /// Raw ISO-8601 timestamp, parsed by the date predicates.
    Timestamp(Option<&'a str>),

    Flag(bool),

    Id(i64),

    /// The record does not carry this field.
    Absent,
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T10:00:00Z`, `...+01:00`), a naive
/// date-time read as UTC, or a bare date read as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Calendar day (UTC) of a backend timestamp, ignoring time of day.
pub fn timestamp_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_timestamp).map(|dt| dt.date_naive())
}

/// Epoch milliseconds of a backend timestamp; missing or malformed is 0.
pub fn epoch_millis(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Milliseconds between two timestamps; 0 unless both are present.
pub fn duration_millis(start: Option<&str>, end: Option<&str>) -> i64 {
    match (start, end) {
        (Some(_), Some(_)) => epoch_millis(end) - epoch_millis(start),
        _ => 0,
    }
}

pub fn text_or_empty(raw: Option<&str>) -> &str {
    raw.unwrap_or("")
}

/// A comparable key extracted from a record for the active sort.
///
/// Text is compared case-insensitively; timestamps and durations compare
/// as integers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    Number(i64),
}

impl SortValue {
    pub fn text(raw: Option<&str>) -> Self {
        SortValue::Text(text_or_empty(raw).to_lowercase())
    }

    pub fn timestamp(raw: Option<&str>) -> Self {
        SortValue::Number(epoch_millis(raw))
    }

    pub fn number(n: i64) -> Self {
        SortValue::Number(n)
    }
}
