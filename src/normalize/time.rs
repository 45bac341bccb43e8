//! Time-of-day normalization.
//!
//! This module parses the clock-time spellings observed across the source
//! feeds: 12-hour forms with a meridiem, 24-hour forms, and an optional
//! trailing timezone abbreviation that is stripped, not converted.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

/// Formats tried for 12-hour values, meridiem attached or spaced.
const MERIDIEM_FORMATS: [&str; 6] = [
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I %p",
    "%I:%M:%S%p",
    "%I:%M%p",
    "%I%p",
];

/// Formats tried for 24-hour values.
const CLOCK_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Normalizes a raw clock-time string into a [`NaiveTime`].
///
/// Accepted forms:
/// - 12-hour with `AM`/`PM` in any case, seconds optional, minutes
///   optional for bare-hour values like `7 AM`, the meridiem spaced or
///   attached (`7:00AM`)
/// - 24-hour `HH:MM` and `HH:MM:SS`
/// - either form followed by a 1-3 letter timezone abbreviation
///   (`06:58 PST`), which is stripped without conversion — the feeds all
///   report site-local wall-clock time
///
/// Noon (`12:00 PM`) maps to hour 12; midnight (`12:00 AM`) maps to
/// hour 0.
///
/// # Arguments
///
/// * `raw` - The time string exactly as a source feed supplied it
///
/// # Returns
///
/// The parsed time of day, or [`EngineError::TimeParseError`] when no
/// accepted form matches.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::normalize_time;
/// use chrono::NaiveTime;
///
/// let time = normalize_time("7:05 AM").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(7, 5, 0).unwrap());
///
/// let with_zone = normalize_time("15:45 PST").unwrap();
/// assert_eq!(with_zone, NaiveTime::from_hms_opt(15, 45, 0).unwrap());
/// ```
pub fn normalize_time(raw: &str) -> EngineResult<NaiveTime> {
    let trimmed = raw.trim();
    let candidate = strip_timezone_suffix(trimmed);

    for format in MERIDIEM_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(candidate, format) {
            return Ok(time);
        }
    }
    for format in CLOCK_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(candidate, format) {
            return Ok(time);
        }
    }

    Err(EngineError::TimeParseError {
        value: raw.to_string(),
    })
}

/// Strips a trailing 1-3 letter timezone abbreviation, if present.
///
/// The meridiem is never treated as a timezone: `7:00 AM` keeps its `AM`
/// while `7:00 AM PST` loses only the `PST`.
fn strip_timezone_suffix(value: &str) -> &str {
    let run_start = value
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .last();

    let Some(start) = run_start else {
        return value;
    };

    let run = &value[start..];
    if (1..=3).contains(&run.len())
        && !run.eq_ignore_ascii_case("am")
        && !run.eq_ignore_ascii_case("pm")
    {
        value[..start].trim_end()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    // ==========================================================================
    // TN-001: 24-hour HH:MM
    // ==========================================================================
    #[test]
    fn test_tn_001_24_hour_hh_mm() {
        assert_eq!(normalize_time("07:15").unwrap(), make_time("07:15:00"));
        assert_eq!(normalize_time("15:45").unwrap(), make_time("15:45:00"));
    }

    // ==========================================================================
    // TN-002: 24-hour HH:MM:SS
    // ==========================================================================
    #[test]
    fn test_tn_002_24_hour_with_seconds() {
        assert_eq!(normalize_time("06:58:30").unwrap(), make_time("06:58:30"));
    }

    // ==========================================================================
    // TN-003: 12-hour with meridiem
    // ==========================================================================
    #[test]
    fn test_tn_003_12_hour_meridiem() {
        assert_eq!(normalize_time("7:05 AM").unwrap(), make_time("07:05:00"));
        assert_eq!(normalize_time("3:45 PM").unwrap(), make_time("15:45:00"));
        assert_eq!(normalize_time("11:59 pm").unwrap(), make_time("23:59:00"));
    }

    // ==========================================================================
    // TN-004: Noon maps to 12, midnight maps to 0
    // ==========================================================================
    #[test]
    fn test_tn_004_noon_and_midnight() {
        assert_eq!(normalize_time("12:00 PM").unwrap(), make_time("12:00:00"));
        assert_eq!(normalize_time("12:00 AM").unwrap(), make_time("00:00:00"));
    }

    // ==========================================================================
    // TN-005: Timezone abbreviation stripped, not converted
    // ==========================================================================
    #[test]
    fn test_tn_005_timezone_suffix_stripped() {
        assert_eq!(normalize_time("06:58 PST").unwrap(), make_time("06:58:00"));
        assert_eq!(normalize_time("7:05 AM PST").unwrap(), make_time("07:05:00"));
        assert_eq!(normalize_time("15:45 z").unwrap(), make_time("15:45:00"));
    }

    // ==========================================================================
    // TN-006: Meridiem attached without a space
    // ==========================================================================
    #[test]
    fn test_tn_006_attached_meridiem() {
        assert_eq!(normalize_time("7:00AM").unwrap(), make_time("07:00:00"));
        assert_eq!(normalize_time("4:30PM").unwrap(), make_time("16:30:00"));
    }

    // ==========================================================================
    // TN-007: Unrecognized input fails with TimeParseError
    // ==========================================================================
    #[test]
    fn test_tn_007_unrecognized_input_fails() {
        let err = normalize_time("not-a-time").unwrap_err();
        match err {
            EngineError::TimeParseError { value } => assert_eq!(value, "not-a-time"),
            other => panic!("expected TimeParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_hour_with_meridiem() {
        assert_eq!(normalize_time("7 AM").unwrap(), make_time("07:00:00"));
        assert_eq!(normalize_time("12 PM").unwrap(), make_time("12:00:00"));
    }

    #[test]
    fn test_12_hour_with_seconds() {
        assert_eq!(normalize_time("7:05:30 AM").unwrap(), make_time("07:05:30"));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(normalize_time("  07:15  ").unwrap(), make_time("07:15:00"));
    }

    #[test]
    fn test_idempotent_on_canonical_rendering() {
        let time = normalize_time("3:45 PM").unwrap();
        let rendered = time.format("%H:%M:%S").to_string();
        assert_eq!(normalize_time(&rendered).unwrap(), time);
    }

    #[test]
    fn test_out_of_range_values_fail() {
        assert!(normalize_time("25:00").is_err());
        assert!(normalize_time("07:61").is_err());
        assert!(normalize_time("13:00 PM").is_err());
    }

    #[test]
    fn test_empty_string_fails() {
        assert!(normalize_time("").is_err());
        assert!(normalize_time("   ").is_err());
    }

    #[test]
    fn test_long_alpha_suffix_is_not_a_timezone() {
        assert!(normalize_time("07:15 PACIFIC").is_err());
    }
}
