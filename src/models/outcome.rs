//! Classification outcome types.
//!
//! This module defines the [`AttendanceStatus`] enumeration, the
//! [`AnomalyFlag`] identifiers, and the [`ClassificationOutcome`] attached
//! to every merged record by the classifier.

use serde::{Deserialize, Serialize};

/// The attendance state assigned to one worker for one date.
///
/// Exactly one of these five values is assigned per record — never null,
/// never free text.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// let status = AttendanceStatus::OnTime;
/// assert_eq!(status.to_string(), "on_time");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Arrived on or before the late threshold and completed the day.
    OnTime,
    /// Arrived after the late threshold.
    Late,
    /// Departed before the early-end cutoff, or worked fewer than the
    /// minimum hours.
    EarlyEnd,
    /// No activity at all recorded for the date.
    NoShow,
    /// Not enough information to judge arrival (e.g. departure only).
    Unclassified,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::OnTime => write!(f, "on_time"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::EarlyEnd => write!(f, "early_end"),
            AttendanceStatus::NoShow => write!(f, "no_show"),
            AttendanceStatus::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// A machine-readable tag for one detected irregularity.
///
/// Flags are independent of the overall [`AttendanceStatus`]: a record can
/// be `on_time` and still carry `job_site_mismatch`, for example. The
/// classifier appends flags in decision order and never duplicates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyFlag {
    /// No start, no end, no positive timecard hours for the date.
    MissingTimeRecords,
    /// Arrived after the standard start but inside the grace period.
    WithinGracePeriod,
    /// Arrived after the late threshold.
    LateArrival,
    /// A departure was recorded but no arrival.
    MissingTimeIn,
    /// Departed before the early-end cutoff.
    EarlyDeparture,
    /// Computed duration fell short of the minimum hours.
    InsufficientHours,
    /// Timecard hours and computed duration disagree.
    TimecardMismatch,
    /// The timecard reports enough hours while the computed duration does
    /// not; the telemetry-derived span is the suspect, not the worker.
    TimecardShowsSufficientHours,
    /// The timecard reports fewer than the minimum hours on an otherwise
    /// on-time day.
    TimecardShowsInsufficientHours,
    /// Resolved and timecard job-site labels name different sites.
    JobSiteMismatch,
    /// The end time preceded the start time; an overnight span was assumed
    /// and the duration capped at twelve hours.
    OvernightSpanCapped,
}

impl std::fmt::Display for AnomalyFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AnomalyFlag::MissingTimeRecords => "missing_time_records",
            AnomalyFlag::WithinGracePeriod => "within_grace_period",
            AnomalyFlag::LateArrival => "late_arrival",
            AnomalyFlag::MissingTimeIn => "missing_time_in",
            AnomalyFlag::EarlyDeparture => "early_departure",
            AnomalyFlag::InsufficientHours => "insufficient_hours",
            AnomalyFlag::TimecardMismatch => "timecard_mismatch",
            AnomalyFlag::TimecardShowsSufficientHours => "timecard_shows_sufficient_hours",
            AnomalyFlag::TimecardShowsInsufficientHours => "timecard_shows_insufficient_hours",
            AnomalyFlag::JobSiteMismatch => "job_site_mismatch",
            AnomalyFlag::OvernightSpanCapped => "overnight_span_capped",
        };
        write!(f, "{}", label)
    }
}

/// The classification attached to one [`CombinedAttendanceRecord`].
///
/// [`CombinedAttendanceRecord`]: crate::models::CombinedAttendanceRecord
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AnomalyFlag, AttendanceStatus, ClassificationOutcome};
///
/// let outcome = ClassificationOutcome {
///     status: AttendanceStatus::Late,
///     reason: "Arrived at 07:20, after the 07:15 late arrival threshold".to_string(),
///     flags: vec![AnomalyFlag::LateArrival],
/// };
/// assert_eq!(outcome.status, AttendanceStatus::Late);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    /// The assigned attendance state.
    pub status: AttendanceStatus,
    /// Human-readable justification for the status.
    pub reason: String,
    /// Detected irregularities, in decision order, duplicate-free.
    pub flags: Vec<AnomalyFlag>,
}

impl ClassificationOutcome {
    /// Returns true if the outcome carries the given flag.
    pub fn has_flag(&self, flag: AnomalyFlag) -> bool {
        self.flags.contains(&flag)
    }
}
