//! Raw feed record model and source kinds.
//!
//! This module defines the [`RawSourceRecord`] struct — one pre-parsed row
//! from one workforce-tracking feed — and the [`SourceKind`] enum naming
//! the four supported feeds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies which feed a raw record came from.
///
/// The variants are ordered by default merge priority: the most
/// geolocation-precise source first, payroll last. The priority actually
/// applied during a merge is configurable (see
/// [`SourcePriority`](crate::config::SourcePriority)); this declaration
/// order is only the default.
///
/// # Example
///
/// ```
/// use attendance_engine::models::SourceKind;
///
/// let kind = SourceKind::TimeOnSite;
/// assert_eq!(kind.to_string(), "time-on-site");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Vehicle telemetry presence windows (geofence in/out per site).
    TimeOnSite,
    /// Trip logs from the vehicle tracking vendor.
    DrivingHistory,
    /// Per-stop activity events.
    ActivityDetail,
    /// Payroll timecards (the only source reporting payroll hours).
    Timecard,
}

impl SourceKind {
    /// All source kinds, in default priority order.
    pub const ALL: [SourceKind; 4] = [
        SourceKind::TimeOnSite,
        SourceKind::DrivingHistory,
        SourceKind::ActivityDetail,
        SourceKind::Timecard,
    ];
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::TimeOnSite => write!(f, "time-on-site"),
            SourceKind::DrivingHistory => write!(f, "driving-history"),
            SourceKind::ActivityDetail => write!(f, "activity-detail"),
            SourceKind::Timecard => write!(f, "timecard"),
        }
    }
}

/// One pre-parsed row from one feed, as handed over by a source adapter.
///
/// All identity and time fields are raw strings exactly as the feed
/// reported them; normalization happens inside the engine, not in the
/// adapters. A record is immutable once produced.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{RawSourceRecord, SourceKind};
///
/// let record = RawSourceRecord {
///     source: SourceKind::TimeOnSite,
///     display_name: "John Smith".to_string(),
///     worker_id: "Smith, John".to_string(),
///     date: "03/14/2025".to_string(),
///     start_time: Some("6:55 AM".to_string()),
///     end_time: Some("4:10 PM".to_string()),
///     job_site: Some("Riverside Plant".to_string()),
///     reported_hours: None,
/// };
/// assert_eq!(record.source, SourceKind::TimeOnSite);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSourceRecord {
    /// Which feed produced this row.
    pub source: SourceKind,
    /// The worker's display name as the feed spells it.
    pub display_name: String,
    /// The raw worker identifier, pre-normalization.
    pub worker_id: String,
    /// The raw calendar date string.
    pub date: String,
    /// The raw start time string, if the feed reported one.
    #[serde(default)]
    pub start_time: Option<String>,
    /// The raw end time string, if the feed reported one.
    #[serde(default)]
    pub end_time: Option<String>,
    /// The job-site label, if the feed reported one.
    #[serde(default)]
    pub job_site: Option<String>,
    /// Payroll hours as reported; only meaningful for [`SourceKind::Timecard`].
    #[serde(default)]
    pub reported_hours: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_source_kind_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SourceKind::TimeOnSite).unwrap(),
            "\"time-on-site\""
        );
        assert_eq!(
            serde_json::to_string(&SourceKind::DrivingHistory).unwrap(),
            "\"driving-history\""
        );
        assert_eq!(
            serde_json::to_string(&SourceKind::ActivityDetail).unwrap(),
            "\"activity-detail\""
        );
        assert_eq!(
            serde_json::to_string(&SourceKind::Timecard).unwrap(),
            "\"timecard\""
        );
    }

    #[test]
    fn test_source_kind_deserializes_kebab_case() {
        let kind: SourceKind = serde_json::from_str("\"driving-history\"").unwrap();
        assert_eq!(kind, SourceKind::DrivingHistory);
    }

    #[test]
    fn test_source_kind_display_matches_serde() {
        for kind in SourceKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_all_lists_every_kind_once() {
        assert_eq!(SourceKind::ALL.len(), 4);
        for kind in SourceKind::ALL {
            assert_eq!(SourceKind::ALL.iter().filter(|k| **k == kind).count(), 1);
        }
    }

    #[test]
    fn test_raw_record_deserialization_with_optional_fields_absent() {
        let json = r#"{
            "source": "timecard",
            "display_name": "Ana Torres",
            "worker_id": "id: ana.torres",
            "date": "2025-03-14"
        }"#;

        let record: RawSourceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.source, SourceKind::Timecard);
        assert_eq!(record.display_name, "Ana Torres");
        assert!(record.start_time.is_none());
        assert!(record.end_time.is_none());
        assert!(record.job_site.is_none());
        assert!(record.reported_hours.is_none());
    }

    #[test]
    fn test_raw_record_round_trip() {
        let record = RawSourceRecord {
            source: SourceKind::Timecard,
            display_name: "Ana Torres".to_string(),
            worker_id: "ana torres".to_string(),
            date: "2025-03-14".to_string(),
            start_time: None,
            end_time: None,
            job_site: Some("North Yard".to_string()),
            reported_hours: Some(Decimal::from_str("8.0").unwrap()),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: RawSourceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_reported_hours_deserializes_from_string() {
        // Timecard exports carry hours as strings; the serde-with-str
        // feature on rust_decimal accepts both forms.
        let json = r#"{
            "source": "timecard",
            "display_name": "Ana Torres",
            "worker_id": "ana torres",
            "date": "2025-03-14",
            "reported_hours": "7.75"
        }"#;

        let record: RawSourceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.reported_hours,
            Some(Decimal::from_str("7.75").unwrap())
        );
    }
}
