//! Weekly summary models.
//!
//! This module contains the [`WeeklySummary`] type and its associated
//! structures that capture a worker's attendance over one reporting window:
//! per-status counts, anomaly tallies, derived summary flags, and the
//! underlying daily records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AnomalyFlag, AttendanceStatus, CombinedAttendanceRecord, ReportingWindow,
};

/// Per-status day counts for one worker's reporting window.
///
/// One counter per attendance status, so report consumers never have to
/// re-derive counts from the record list.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceStatus, StatusCounts};
///
/// let mut counts = StatusCounts::default();
/// counts.record(AttendanceStatus::OnTime);
/// counts.record(AttendanceStatus::OnTime);
/// counts.record(AttendanceStatus::Late);
///
/// assert_eq!(counts.on_time, 2);
/// assert_eq!(counts.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Days classified `on_time`.
    pub on_time: u32,
    /// Days classified `late`.
    pub late: u32,
    /// Days classified `early_end`.
    pub early_end: u32,
    /// Days classified `no_show`.
    pub no_show: u32,
    /// Days classified `unclassified`.
    pub unclassified: u32,
}

impl StatusCounts {
    /// Increments the counter for the given status.
    pub fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::OnTime => self.on_time += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::EarlyEnd => self.early_end += 1,
            AttendanceStatus::NoShow => self.no_show += 1,
            AttendanceStatus::Unclassified => self.unclassified += 1,
        }
    }

    /// Returns the total number of counted days.
    pub fn total(&self) -> u32 {
        self.on_time + self.late + self.early_end + self.no_show + self.unclassified
    }
}

/// A window-level finding derived from a worker's daily classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryFlag {
    /// Two or more late days in the window.
    MultipleLateDays,
    /// Two or more early-end days in the window.
    MultipleEarlyEndDays,
    /// At least one no-show day in the window.
    HasAbsence,
    /// At least one daily record carried `timecard_mismatch`.
    TimecardMismatches,
    /// At least one daily record carried `job_site_mismatch`.
    JobMismatches,
    /// At least one daily record carried `insufficient_hours`.
    InsufficientHours,
}

impl std::fmt::Display for SummaryFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SummaryFlag::MultipleLateDays => "multiple_late_days",
            SummaryFlag::MultipleEarlyEndDays => "multiple_early_end_days",
            SummaryFlag::HasAbsence => "has_absence",
            SummaryFlag::TimecardMismatches => "timecard_mismatches",
            SummaryFlag::JobMismatches => "job_mismatches",
            SummaryFlag::InsufficientHours => "insufficient_hours",
        };
        write!(f, "{}", label)
    }
}

/// One worker's attendance rolled up over a reporting window.
///
/// Produced by the aggregator from a finished set of classified records and
/// never mutated afterwards; a new reporting window produces a new summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Normalized join identity the summary was grouped by.
    pub worker_key: String,
    /// Presentation name for the worker.
    pub display_name: String,
    /// The window this summary covers.
    pub window: ReportingWindow,
    /// Number of days with a record inside the window.
    pub days_observed: u32,
    /// Day counts split by attendance status.
    pub status_counts: StatusCounts,
    /// How often each anomaly flag occurred across the window's days.
    pub flag_tallies: BTreeMap<AnomalyFlag, u32>,
    /// Window-level findings derived from the daily statuses and flags.
    pub summary_flags: Vec<SummaryFlag>,
    /// Percentage of observed days classified `on_time`, one decimal place.
    pub attendance_rate: Decimal,
    /// The window's daily records, date-ordered.
    pub records: Vec<CombinedAttendanceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn march_week() -> ReportingWindow {
        ReportingWindow {
            start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
        }
    }

    /// SC-001: record increments the matching counter only
    #[test]
    fn test_record_increments_matching_counter() {
        let mut counts = StatusCounts::default();
        counts.record(AttendanceStatus::Late);
        counts.record(AttendanceStatus::Late);
        counts.record(AttendanceStatus::NoShow);

        assert_eq!(counts.late, 2);
        assert_eq!(counts.no_show, 1);
        assert_eq!(counts.on_time, 0);
        assert_eq!(counts.early_end, 0);
        assert_eq!(counts.unclassified, 0);
    }

    /// SC-002: total sums every counter
    #[test]
    fn test_total_sums_all_counters() {
        let counts = StatusCounts {
            on_time: 3,
            late: 1,
            early_end: 1,
            no_show: 0,
            unclassified: 0,
        };
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_default_counts_are_zero() {
        let counts = StatusCounts::default();
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_summary_flag_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SummaryFlag::MultipleLateDays).unwrap(),
            "\"multiple_late_days\""
        );
        assert_eq!(
            serde_json::to_string(&SummaryFlag::HasAbsence).unwrap(),
            "\"has_absence\""
        );
    }

    #[test]
    fn test_summary_flag_display_matches_serde() {
        let flags = [
            SummaryFlag::MultipleLateDays,
            SummaryFlag::MultipleEarlyEndDays,
            SummaryFlag::HasAbsence,
            SummaryFlag::TimecardMismatches,
            SummaryFlag::JobMismatches,
            SummaryFlag::InsufficientHours,
        ];
        for flag in flags {
            let json = serde_json::to_string(&flag).unwrap();
            assert_eq!(json, format!("\"{}\"", flag));
        }
    }

    #[test]
    fn test_weekly_summary_serialization() {
        let mut flag_tallies = BTreeMap::new();
        flag_tallies.insert(AnomalyFlag::LateArrival, 2u32);
        flag_tallies.insert(AnomalyFlag::EarlyDeparture, 1u32);

        let summary = WeeklySummary {
            worker_key: "jane doe".to_string(),
            display_name: "Jane Doe".to_string(),
            window: march_week(),
            days_observed: 5,
            status_counts: StatusCounts {
                on_time: 2,
                late: 2,
                early_end: 1,
                no_show: 0,
                unclassified: 0,
            },
            flag_tallies,
            summary_flags: vec![SummaryFlag::MultipleLateDays],
            attendance_rate: dec("40.0"),
            records: vec![],
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"worker_key\":\"jane doe\""));
        assert!(json.contains("\"late_arrival\":2"));
        assert!(json.contains("\"summary_flags\":[\"multiple_late_days\"]"));
        assert!(json.contains("\"attendance_rate\":\"40.0\""));
    }

    #[test]
    fn test_weekly_summary_round_trip() {
        let summary = WeeklySummary {
            worker_key: "john smith".to_string(),
            display_name: "John Smith".to_string(),
            window: march_week(),
            days_observed: 1,
            status_counts: StatusCounts {
                on_time: 1,
                ..StatusCounts::default()
            },
            flag_tallies: BTreeMap::new(),
            summary_flags: vec![],
            attendance_rate: dec("100.0"),
            records: vec![],
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: WeeklySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
