//! Combined attendance record model.
//!
//! This module defines the [`CombinedAttendanceRecord`], the unit of merge
//! and classification: one record per worker per date, assembled from
//! whichever source feeds reported that worker on that day.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ClassificationOutcome, SourceKind};
use crate::normalize::SpanHours;

/// One worker's reconciled attendance for one date.
///
/// Exactly one of these exists per `(worker_key, date)` join key in a run's
/// output. Time and label fields hold the values resolved by source
/// priority; `timecard_hours` and `timecard_job_site` are populated only
/// from timecard rows so the classifier can cross-check them against the
/// telemetry-derived fields.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{CombinedAttendanceRecord, SourceKind};
/// use chrono::NaiveDate;
///
/// let record = CombinedAttendanceRecord::new(
///     "john smith".to_string(),
///     "John Smith".to_string(),
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
/// );
/// assert!(record.start_time.is_none());
/// assert!(!record.has_activity());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedAttendanceRecord {
    /// Normalized join identity for the worker.
    pub worker_key: String,
    /// Presentation name, taken from the highest-priority source that
    /// supplied one.
    pub display_name: String,
    /// The calendar date this record covers.
    pub date: NaiveDate,
    /// Resolved arrival time, if any source reported one.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Resolved departure time, if any source reported one.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Resolved job-site label from the non-timecard feeds.
    #[serde(default)]
    pub job_site: Option<String>,
    /// Total self-reported hours across the worker's timecard rows.
    #[serde(default)]
    pub timecard_hours: Option<Decimal>,
    /// Job-site label as the timecard reports it.
    #[serde(default)]
    pub timecard_job_site: Option<String>,
    /// Elapsed span between the resolved start and end times.
    #[serde(default)]
    pub duration: Option<SpanHours>,
    /// Every feed that contributed to this record, in priority order,
    /// duplicate-free.
    #[serde(default)]
    pub sources: Vec<SourceKind>,
    /// The classifier's verdict. Always present in engine output.
    #[serde(default)]
    pub classification: Option<ClassificationOutcome>,
}

impl CombinedAttendanceRecord {
    /// Creates an empty record for the given join identity.
    ///
    /// The merger seeds one of these the first time a join key appears and
    /// lets subsequent contributions fill it in.
    pub fn new(worker_key: String, display_name: String, date: NaiveDate) -> Self {
        CombinedAttendanceRecord {
            worker_key,
            display_name,
            date,
            start_time: None,
            end_time: None,
            job_site: None,
            timecard_hours: None,
            timecard_job_site: None,
            duration: None,
            sources: Vec::new(),
            classification: None,
        }
    }

    /// Returns true if any source reported activity for this date.
    ///
    /// Activity means a start time, an end time, or positive timecard
    /// hours. A record with none of these is a no-show candidate.
    pub fn has_activity(&self) -> bool {
        self.start_time.is_some()
            || self.end_time.is_some()
            || self.timecard_hours.is_some_and(|h| h > Decimal::ZERO)
    }
}
