//! Run report models.
//!
//! This module contains the envelopes returned for whole reconciliation
//! runs: the [`ReconciliationReport`] for a daily run, the [`WeeklyReport`]
//! for a windowed run, and the [`RunDiagnostics`] that surface every raw
//! record the run had to drop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    CombinedAttendanceRecord, ReportingWindow, SourceKind, WeeklySummary,
};

/// One raw record the run could not use, and why.
///
/// Dropped records keep their raw identifier and date strings so an
/// operator can find the offending row in the source export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedRecord {
    /// The feed the record came from.
    pub source: SourceKind,
    /// The raw worker identifier, exactly as the feed supplied it.
    pub worker: String,
    /// The raw date string, exactly as the feed supplied it.
    pub date: String,
    /// The rendered normalization error that caused the drop.
    pub reason: String,
}

/// Per-run accounting of records that failed normalization.
///
/// A batch with malformed rows still produces a complete report for the
/// well-formed rows; the diagnostics carry the count so callers never
/// lose data silently.
///
/// # Example
///
/// ```
/// use attendance_engine::models::RunDiagnostics;
///
/// let diagnostics = RunDiagnostics::new(vec![]);
/// assert_eq!(diagnostics.dropped_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDiagnostics {
    /// Number of raw records dropped during normalization.
    pub dropped_count: usize,
    /// The dropped records with their reasons, in input order.
    pub dropped: Vec<DroppedRecord>,
}

impl RunDiagnostics {
    /// Builds diagnostics from the run's dropped records.
    ///
    /// `dropped_count` always equals the list length.
    pub fn new(dropped: Vec<DroppedRecord>) -> Self {
        RunDiagnostics {
            dropped_count: dropped.len(),
            dropped,
        }
    }
}

/// The complete result of a single-day reconciliation run.
///
/// Wraps the classified records with run identity, timing, and the
/// diagnostics for any rows that failed normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// One classified record per worker per date, key-ordered.
    pub records: Vec<CombinedAttendanceRecord>,
    /// Accounting of raw records the run dropped.
    pub diagnostics: RunDiagnostics,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a windowed reconciliation run.
///
/// Same envelope as [`ReconciliationReport`] but carrying per-worker
/// weekly summaries for the requested window instead of raw records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The window the summaries cover.
    pub window: ReportingWindow,
    /// One summary per worker observed inside the window, name-ordered.
    pub summaries: Vec<WeeklySummary>,
    /// Accounting of raw records the run dropped.
    pub diagnostics: RunDiagnostics,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}
