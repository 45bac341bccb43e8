//! The reconciliation pipeline.
//!
//! Raw feed records go through two stages: [`merge_records`] joins them
//! into one combined record per worker per date, then [`classify_record`]
//! attaches an attendance status to each. [`summarize_window`] rolls
//! classified records up into weekly per-worker summaries. The whole
//! pipeline is pure and stateless; malformed input rows surface as
//! diagnostics, never as failures.

pub mod classifier;
pub mod merger;
pub mod weekly;

pub use classifier::classify_record;
pub use merger::{MergeOutcome, merge_records};
pub use weekly::summarize_window;

use crate::config::EngineConfig;
use crate::models::{CombinedAttendanceRecord, RawSourceRecord, RunDiagnostics};

/// Classified output of one reconciliation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    /// Combined records with classifications attached, key-ordered.
    pub records: Vec<CombinedAttendanceRecord>,
    /// What was dropped on the way, and why.
    pub diagnostics: RunDiagnostics,
}

/// Runs the full merge-then-classify pipeline over a raw batch.
///
/// # Arguments
///
/// * `raw_records` - Raw records from any mix of source feeds
/// * `config` - Source priority and shift schedule to apply
///
/// # Returns
///
/// One classified record per worker per date, plus run diagnostics for
/// any raw records that failed normalization.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{AttendanceStatus, RawSourceRecord, SourceKind};
/// use attendance_engine::reconcile::reconcile_records;
///
/// let raw = RawSourceRecord {
///     source: SourceKind::TimeOnSite,
///     display_name: "Jane Doe".to_string(),
///     worker_id: "jane doe".to_string(),
///     date: "2026-03-02".to_string(),
///     start_time: Some("07:20 AM".to_string()),
///     end_time: Some("04:00 PM".to_string()),
///     job_site: None,
///     reported_hours: None,
/// };
///
/// let outcome = reconcile_records(&[raw], &EngineConfig::default());
/// let classification = outcome.records[0].classification.as_ref().unwrap();
/// assert_eq!(classification.status, AttendanceStatus::Late);
/// ```
pub fn reconcile_records(
    raw_records: &[RawSourceRecord],
    config: &EngineConfig,
) -> ReconcileOutcome {
    let MergeOutcome {
        mut records,
        dropped,
    } = merge_records(raw_records, &config.sources);

    for record in &mut records {
        let outcome = classify_record(record, &config.schedule);
        record.classification = Some(outcome);
    }

    ReconcileOutcome {
        records,
        diagnostics: RunDiagnostics::new(dropped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnomalyFlag, AttendanceStatus, SourceKind};
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn raw(source: SourceKind, worker: &str, date: &str) -> RawSourceRecord {
        RawSourceRecord {
            source,
            display_name: worker.to_string(),
            worker_id: worker.to_string(),
            date: date.to_string(),
            start_time: None,
            end_time: None,
            job_site: None,
            reported_hours: None,
        }
    }

    // ==========================================================================
    // RC-001: Priority start survives the merge and sites cross-validate
    // ==========================================================================
    #[test]
    fn test_rc_001_merged_record_keeps_priority_start_and_flags_site() {
        let mut site = raw(SourceKind::TimeOnSite, "Driver: John Smith", "03/02/2026");
        site.start_time = Some("6:50 AM".to_string());
        site.job_site = Some("Riverside Depot".to_string());

        let mut card = raw(SourceKind::Timecard, "Smith, John", "2026-03-02");
        card.reported_hours = Some(dec("8.0"));
        card.job_site = Some("Central Yard".to_string());

        let outcome = reconcile_records(&[card, site], &EngineConfig::default());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.diagnostics.dropped_count, 0);

        let record = &outcome.records[0];
        assert_eq!(record.worker_key, "john smith");
        assert_eq!(
            record.start_time,
            Some(NaiveTime::from_hms_opt(6, 50, 0).unwrap())
        );

        let classification = record.classification.as_ref().unwrap();
        assert_eq!(classification.status, AttendanceStatus::OnTime);
        assert_eq!(classification.flags, vec![AnomalyFlag::JobSiteMismatch]);
    }

    // ==========================================================================
    // RC-002: Every surviving record leaves the pipeline classified
    // ==========================================================================
    #[test]
    fn test_rc_002_all_records_classified() {
        let mut monday = raw(SourceKind::TimeOnSite, "jane doe", "2026-03-02");
        monday.start_time = Some("07:05:00".to_string());
        let mut tuesday = raw(SourceKind::ActivityDetail, "jane doe", "2026-03-03");
        tuesday.end_time = Some("15:45:00".to_string());
        let card = {
            let mut card = raw(SourceKind::Timecard, "john smith", "2026-03-02");
            card.reported_hours = Some(dec("8.0"));
            card
        };

        let outcome = reconcile_records(&[monday, tuesday, card], &EngineConfig::default());
        assert_eq!(outcome.records.len(), 3);
        assert!(outcome.records.iter().all(|r| r.classification.is_some()));
    }

    // ==========================================================================
    // RC-003: Malformed rows surface as diagnostics, not failures
    // ==========================================================================
    #[test]
    fn test_rc_003_diagnostics_carry_dropped_rows() {
        let good = {
            let mut good = raw(SourceKind::TimeOnSite, "jane doe", "2026-03-02");
            good.start_time = Some("07:00:00".to_string());
            good
        };
        let bad_date = raw(SourceKind::Timecard, "john smith", "someday");
        let bad_time = {
            let mut bad = raw(SourceKind::DrivingHistory, "amy barnes", "2026-03-02");
            bad.start_time = Some("early".to_string());
            bad
        };

        let outcome = reconcile_records(&[good, bad_date, bad_time], &EngineConfig::default());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.diagnostics.dropped_count, 2);
        assert_eq!(outcome.diagnostics.dropped.len(), 2);
    }

    #[test]
    fn test_empty_batch_reconciles_to_empty_outcome() {
        let outcome = reconcile_records(&[], &EngineConfig::default());
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.diagnostics.dropped_count, 0);
    }
}
