//! Date normalization.
//!
//! This module parses the date spellings observed across the source feeds
//! into [`NaiveDate`] values. Ambiguous `MM/DD` vs `DD/MM` orderings are
//! resolved by a caller-supplied [`DateOrder`] hint rather than guessed.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Which component comes first in an ambiguous slash-separated date.
///
/// Feeds that localize dates disagree on `03/02/2026`: month-first reads
/// March 2nd, day-first reads February 3rd. The hint is configuration
/// (`sources.yaml`), not a guess made per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `MM/DD/YYYY` — the ordering implied by a 4-digit year in final
    /// position, and the default.
    MonthFirst,
    /// `DD/MM/YYYY`.
    DayFirst,
}

impl Default for DateOrder {
    fn default() -> Self {
        DateOrder::MonthFirst
    }
}

/// Normalizes a raw date string using the default month-first ordering.
///
/// See [`normalize_date_with`] for the accepted formats and the ambiguity
/// rule.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::normalize_date;
/// use chrono::NaiveDate;
///
/// let date = normalize_date("03/02/2026").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
/// ```
pub fn normalize_date(raw: &str) -> EngineResult<NaiveDate> {
    normalize_date_with(raw, DateOrder::MonthFirst)
}

/// Normalizes a raw date string into a [`NaiveDate`].
///
/// Accepted formats:
/// - `YYYY-MM-DD` (canonical)
/// - `MM/DD/YYYY` and `DD/MM/YYYY` (the `order` hint decides which is
///   tried first; an unambiguous value like `13/02/2026` parses under
///   either hint)
/// - `MM-DD-YYYY`
/// - `YYYY/MM/DD`
/// - ISO-8601 datetimes, with or without an offset or fractional seconds;
///   only the date component is kept
///
/// # Arguments
///
/// * `raw` - The date string exactly as a source feed supplied it
/// * `order` - Ambiguity hint for slash-separated dates
///
/// # Returns
///
/// The parsed date, or [`EngineError::DateParseError`] when no accepted
/// format matches.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::{normalize_date_with, DateOrder};
/// use chrono::NaiveDate;
///
/// let month_first = normalize_date_with("03/02/2026", DateOrder::MonthFirst).unwrap();
/// assert_eq!(month_first, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
///
/// let day_first = normalize_date_with("03/02/2026", DateOrder::DayFirst).unwrap();
/// assert_eq!(day_first, NaiveDate::from_ymd_opt(2026, 2, 3).unwrap());
/// ```
pub fn normalize_date_with(raw: &str, order: DateOrder) -> EngineResult<NaiveDate> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    let slash_formats = match order {
        DateOrder::MonthFirst => ["%m/%d/%Y", "%d/%m/%Y"],
        DateOrder::DayFirst => ["%d/%m/%Y", "%m/%d/%Y"],
    };
    for format in slash_formats {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    for format in ["%m-%d-%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    // ISO-8601 datetimes carry the date in front; keep that component and
    // discard the time and any offset.
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    Err(EngineError::DateParseError {
        value: raw.to_string(),
    })
}
