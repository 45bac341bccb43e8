//! Elapsed-span calculation.
//!
//! This module computes the worked span between two times of day. The
//! feeds report wall-clock times without dates attached, so an end time
//! that precedes its start is read as an overnight span and bounded to
//! keep one bad row from reporting an absurd shift length.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The elapsed hours between a resolved start and end time.
///
/// Carries how the value was derived so the classifier can flag an
/// assumed-and-capped overnight span instead of trusting it.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::span_between;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let span = span_between(
///     NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
/// );
/// assert_eq!(span.hours, Decimal::new(85, 1)); // 8.5 hours
/// assert!(!span.assumed_overnight);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanHours {
    /// Elapsed hours at whole-minute precision.
    pub hours: Decimal,
    /// True when the end preceded the start and 24 hours were added.
    pub assumed_overnight: bool,
    /// True when an assumed overnight span exceeded 12 hours and was
    /// bounded to 12.
    pub capped: bool,
}

/// Computes the elapsed span between a start and end time of day.
///
/// Start and end are assumed to belong to the same calendar day. When the
/// end precedes the start, the span is read as overnight (24 hours are
/// added) and the result is capped at 12 hours; both adjustments are
/// reported in the returned [`SpanHours`].
///
/// # Arguments
///
/// * `start` - The arrival time
/// * `end` - The departure time
///
/// # Returns
///
/// The elapsed span, never negative.
///
/// # Example
///
/// ```
/// use attendance_engine::normalize::span_between;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// // 22:00 to 06:00 reads as an 8 hour overnight span.
/// let span = span_between(
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
/// );
/// assert_eq!(span.hours, Decimal::new(80, 1));
/// assert!(span.assumed_overnight);
/// assert!(!span.capped);
/// ```
pub fn span_between(start: NaiveTime, end: NaiveTime) -> SpanHours {
    let mut minutes = (end - start).num_minutes();
    let assumed_overnight = minutes < 0;
    if assumed_overnight {
        minutes += 24 * 60;
    }

    let mut hours = Decimal::new(minutes, 0) / Decimal::new(60, 0);
    let cap = Decimal::new(12, 0);
    let capped = assumed_overnight && hours > cap;
    if capped {
        hours = cap;
    }

    SpanHours {
        hours,
        assumed_overnight,
        capped,
    }
}
