//! Multi-source record merging.
//!
//! This module joins raw records from the four source feeds into one
//! [`CombinedAttendanceRecord`] per worker per date. Field conflicts are
//! settled by source priority, never by arrival order: merging the same
//! batch in any order produces identical output.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::SourcePriority;
use crate::error::{EngineError, EngineResult};
use crate::models::{CombinedAttendanceRecord, DroppedRecord, RawSourceRecord, SourceKind};
use crate::normalize::{normalize_date_with, normalize_time, normalize_worker_key, span_between};

/// The outcome of merging one batch of raw records.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// One combined record per `(worker_key, date)` join key, key-ordered.
    pub records: Vec<CombinedAttendanceRecord>,
    /// Raw records that failed normalization, in input order.
    pub dropped: Vec<DroppedRecord>,
}

/// A raw record's usable content after normalization.
struct Contribution {
    worker_key: String,
    date: NaiveDate,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
}

/// Accumulates contributions for one join key.
///
/// Every resolved field carries the rank of the source that owns it, so a
/// later contribution can tell whether it outranks the current owner.
struct RecordBuilder {
    worker_key: String,
    date: NaiveDate,
    display_name: Option<(String, usize)>,
    start_time: Option<(NaiveTime, usize)>,
    end_time: Option<(NaiveTime, usize)>,
    job_site: Option<(String, usize)>,
    timecard_hours: Option<Decimal>,
    timecard_job_site: Option<String>,
    sources: Vec<(SourceKind, usize)>,
}

impl RecordBuilder {
    fn new(worker_key: String, date: NaiveDate) -> Self {
        RecordBuilder {
            worker_key,
            date,
            display_name: None,
            start_time: None,
            end_time: None,
            job_site: None,
            timecard_hours: None,
            timecard_job_site: None,
            sources: Vec::new(),
        }
    }

    fn add(&mut self, raw: &RawSourceRecord, contribution: &Contribution, rank: usize) {
        if !self.sources.iter().any(|(kind, _)| *kind == raw.source) {
            self.sources.push((raw.source, rank));
        }

        let display = raw.display_name.trim();
        if !display.is_empty() {
            apply_label(&mut self.display_name, display.to_string(), rank);
        }

        if let Some(start) = contribution.start_time {
            apply_time(&mut self.start_time, start, rank, TieRule::Earliest);
        }
        if let Some(end) = contribution.end_time {
            apply_time(&mut self.end_time, end, rank, TieRule::Latest);
        }

        if let Some(site) = non_empty(raw.job_site.as_deref()) {
            apply_label(&mut self.job_site, site.to_string(), rank);
        }

        // Payroll fields come only from the timecard feed; no other source
        // reports them.
        if raw.source == SourceKind::Timecard {
            if let Some(hours) = raw.reported_hours {
                self.timecard_hours = Some(self.timecard_hours.unwrap_or(Decimal::ZERO) + hours);
            }
            if let Some(site) = non_empty(raw.job_site.as_deref()) {
                match &self.timecard_job_site {
                    Some(existing) if existing.as_str() <= site => {}
                    _ => self.timecard_job_site = Some(site.to_string()),
                }
            }
        }
    }

    fn finish(self) -> CombinedAttendanceRecord {
        let mut sources = self.sources;
        sources.sort_by_key(|(_, rank)| *rank);

        let start_time = self.start_time.map(|(time, _)| time);
        let end_time = self.end_time.map(|(time, _)| time);
        let duration = match (start_time, end_time) {
            (Some(start), Some(end)) => Some(span_between(start, end)),
            _ => None,
        };

        let display_name = self
            .display_name
            .map(|(name, _)| name)
            .unwrap_or_else(|| self.worker_key.clone());

        CombinedAttendanceRecord {
            worker_key: self.worker_key,
            display_name,
            date: self.date,
            start_time,
            end_time,
            job_site: self.job_site.map(|(site, _)| site),
            timecard_hours: self.timecard_hours,
            timecard_job_site: self.timecard_job_site,
            duration,
            sources: sources.into_iter().map(|(kind, _)| kind).collect(),
            classification: None,
        }
    }
}

/// How two contributions of equal priority are resolved.
#[derive(Clone, Copy, PartialEq)]
enum TieRule {
    /// Keep the earlier value (start times).
    Earliest,
    /// Keep the later value (end times).
    Latest,
}

fn apply_time(slot: &mut Option<(NaiveTime, usize)>, value: NaiveTime, rank: usize, tie: TieRule) {
    match slot {
        None => *slot = Some((value, rank)),
        Some((existing, existing_rank)) => {
            let wins = rank < *existing_rank
                || (rank == *existing_rank
                    && match tie {
                        TieRule::Earliest => value < *existing,
                        TieRule::Latest => value > *existing,
                    });
            if wins {
                *slot = Some((value, rank));
            }
        }
    }
}

fn apply_label(slot: &mut Option<(String, usize)>, value: String, rank: usize) {
    match slot {
        None => *slot = Some((value, rank)),
        Some((existing, existing_rank)) => {
            // Equal-priority labels resolve lexicographically so the
            // outcome never depends on input order.
            if rank < *existing_rank || (rank == *existing_rank && value < *existing) {
                *slot = Some((value, rank));
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Normalizes one raw record's identity, date, and time fields.
///
/// The worker key comes from the raw identifier, falling back to the
/// display name when the identifier normalizes to nothing.
fn normalize_contribution(
    raw: &RawSourceRecord,
    sources: &SourcePriority,
) -> EngineResult<Contribution> {
    let mut worker_key = normalize_worker_key(&raw.worker_id);
    if worker_key.is_empty() {
        worker_key = normalize_worker_key(&raw.display_name);
    }
    if worker_key.is_empty() {
        return Err(EngineError::MissingJoinKey {
            raw_id: raw.worker_id.clone(),
        });
    }

    let date = normalize_date_with(&raw.date, sources.date_order)?;

    let start_time = non_empty(raw.start_time.as_deref())
        .map(normalize_time)
        .transpose()?;
    let end_time = non_empty(raw.end_time.as_deref())
        .map(normalize_time)
        .transpose()?;

    Ok(Contribution {
        worker_key,
        date,
        start_time,
        end_time,
    })
}

/// Merges a batch of raw records into combined attendance records.
///
/// Every raw record has its worker key, date, and any present time fields
/// normalized; records that fail normalization are dropped into the
/// returned [`MergeOutcome::dropped`] list (logged, never fatal) so a
/// batch with malformed rows still produces complete output for the rest.
/// A record with a usable key but no time fields merges normally and
/// contributes presence and job-site information only.
///
/// Field conflicts resolve by the configured source priority: a field is
/// populated by any source while empty and overwritten only by a strictly
/// higher-priority source. Contributions of equal priority resolve
/// order-independently (earliest start, latest end, lexicographically
/// first label, summed timecard hours).
///
/// # Arguments
///
/// * `raw_records` - The batch to merge, any mix of source kinds
/// * `sources` - Source precedence and the date-order hint
///
/// # Returns
///
/// The merged records ordered by `(worker_key, date)`, plus the dropped
/// records with their reasons.
///
/// # Example
///
/// ```
/// use attendance_engine::config::SourcePriority;
/// use attendance_engine::models::{RawSourceRecord, SourceKind};
/// use attendance_engine::reconcile::merge_records;
///
/// let raw = RawSourceRecord {
///     source: SourceKind::TimeOnSite,
///     display_name: "John Smith".to_string(),
///     worker_id: "Driver: John Smith".to_string(),
///     date: "03/02/2026".to_string(),
///     start_time: Some("6:58 AM".to_string()),
///     end_time: Some("3:45 PM".to_string()),
///     job_site: Some("Riverside Depot".to_string()),
///     reported_hours: None,
/// };
///
/// let outcome = merge_records(&[raw], &SourcePriority::default());
/// assert_eq!(outcome.records.len(), 1);
/// assert_eq!(outcome.records[0].worker_key, "john smith");
/// ```
pub fn merge_records(raw_records: &[RawSourceRecord], sources: &SourcePriority) -> MergeOutcome {
    let mut builders: BTreeMap<(String, NaiveDate), RecordBuilder> = BTreeMap::new();
    let mut dropped = Vec::new();

    for raw in raw_records {
        match normalize_contribution(raw, sources) {
            Ok(contribution) => {
                let key = (contribution.worker_key.clone(), contribution.date);
                let builder = builders.entry(key).or_insert_with(|| {
                    RecordBuilder::new(contribution.worker_key.clone(), contribution.date)
                });
                builder.add(raw, &contribution, sources.rank(raw.source));
            }
            Err(error) => {
                warn!(
                    source = %raw.source,
                    worker = %raw.worker_id,
                    date = %raw.date,
                    reason = %error,
                    "Dropping raw record that failed normalization"
                );
                dropped.push(DroppedRecord {
                    source: raw.source,
                    worker: raw.worker_id.clone(),
                    date: raw.date.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }

    let records = builders.into_values().map(RecordBuilder::finish).collect();
    MergeOutcome { records, dropped }
}
