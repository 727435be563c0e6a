//! Number, percentage, and timestamp formatting shared by every front end.

use chrono::{DateTime, Local, TimeZone};
use num_format::{Locale, ToFormattedString};

/// Placeholder shown wherever a ratio is undefined (zero total cases).
pub const NO_PERCENT: &str = "—";

/// Group digits in threes from the right with `,`: `1234567` -> `"1,234,567"`.
pub fn format_number(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// `part / total` as a whole percentage, rounded half-up. `None` when `total == 0`.
pub fn percent_of(part: u64, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    // Integer round-half-up: floor((200 * part + total) / (2 * total)).
    let num = 200u128 * part as u128 + total as u128;
    let den = 2u128 * total as u128;
    Some((num / den) as u64)
}

/// `"25%"`, or [`NO_PERCENT`] when the ratio is undefined.
pub fn format_percent(p: Option<u64>) -> String {
    match p {
        Some(v) => format!("{v}%"),
        None => NO_PERCENT.to_string(),
    }
}

/// Render an API `updated` stamp (ms since epoch) in the local time zone.
pub fn format_updated(updated_ms: i64) -> String {
    format_updated_in(updated_ms, &Local)
}

/// Same as [`format_updated`] for an explicit zone; unrepresentable stamps yield `"unknown"`.
pub fn format_updated_in<Tz: TimeZone>(updated_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(updated_ms) {
        Some(utc) => utc
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "unknown".to_string(),
    }
}
