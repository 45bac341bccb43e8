//! Weekly per-worker rollups.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{
    AnomalyFlag, AttendanceStatus, CombinedAttendanceRecord, ReportingWindow, StatusCounts,
    SummaryFlag, WeeklySummary,
};

/// Builds the summary-level flag list from the week's counts and tallies.
///
/// Flags appear in a fixed order so two summaries with the same week are
/// byte-identical on the wire.
fn derive_summary_flags(
    counts: &StatusCounts,
    tallies: &BTreeMap<AnomalyFlag, u32>,
) -> Vec<SummaryFlag> {
    let occurred = |flag: AnomalyFlag| tallies.get(&flag).copied().unwrap_or(0) > 0;

    let mut flags = Vec::new();
    if counts.late >= 2 {
        flags.push(SummaryFlag::MultipleLateDays);
    }
    if counts.early_end >= 2 {
        flags.push(SummaryFlag::MultipleEarlyEndDays);
    }
    if counts.no_show >= 1 {
        flags.push(SummaryFlag::HasAbsence);
    }
    if occurred(AnomalyFlag::TimecardMismatch) {
        flags.push(SummaryFlag::TimecardMismatches);
    }
    if occurred(AnomalyFlag::JobSiteMismatch) {
        flags.push(SummaryFlag::JobMismatches);
    }
    if occurred(AnomalyFlag::InsufficientHours) {
        flags.push(SummaryFlag::InsufficientHours);
    }
    flags
}

fn attendance_rate(counts: &StatusCounts, days_observed: u32) -> Decimal {
    if days_observed == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(counts.on_time) * Decimal::from(100u32) / Decimal::from(days_observed))
        .round_dp(1)
}

/// Rolls classified records up into one summary per worker.
///
/// Records outside the reporting window are ignored. Grouping uses the
/// normalized worker key rather than the display string, so a worker whose
/// feeds spell their name differently on different days still lands in a
/// single summary; the summary carries the display name from the worker's
/// earliest day in the window.
///
/// Per worker the summary counts days observed and days per status,
/// tallies every anomaly flag across the week, and computes the attendance
/// rate as on-time days over days observed, as a percentage rounded to one
/// decimal place (zero when no days were observed). Records inside each
/// summary are date-ordered; summaries are sorted by display name with the
/// worker key as tiebreak.
///
/// # Arguments
///
/// * `records` - Classified records, consumed into the summaries
/// * `window` - The reporting window to roll up
///
/// # Returns
///
/// One [`WeeklySummary`] per worker observed inside the window.
pub fn summarize_window(
    records: Vec<CombinedAttendanceRecord>,
    window: &ReportingWindow,
) -> Vec<WeeklySummary> {
    let mut groups: BTreeMap<String, Vec<CombinedAttendanceRecord>> = BTreeMap::new();
    for record in records {
        if window.contains_date(record.date) {
            groups.entry(record.worker_key.clone()).or_default().push(record);
        }
    }

    let mut summaries: Vec<WeeklySummary> = groups
        .into_iter()
        .map(|(worker_key, mut days)| {
            days.sort_by_key(|record| record.date);

            let mut status_counts = StatusCounts::default();
            let mut flag_tallies: BTreeMap<AnomalyFlag, u32> = BTreeMap::new();
            for record in &days {
                let status = record
                    .classification
                    .as_ref()
                    .map(|outcome| outcome.status)
                    .unwrap_or(AttendanceStatus::Unclassified);
                status_counts.record(status);

                if let Some(outcome) = &record.classification {
                    for flag in &outcome.flags {
                        *flag_tallies.entry(*flag).or_insert(0) += 1;
                    }
                }
            }

            let days_observed = days.len() as u32;
            let summary_flags = derive_summary_flags(&status_counts, &flag_tallies);
            let rate = attendance_rate(&status_counts, days_observed);
            let display_name = days
                .first()
                .map(|record| record.display_name.clone())
                .unwrap_or_else(|| worker_key.clone());

            WeeklySummary {
                worker_key,
                display_name,
                window: *window,
                days_observed,
                status_counts,
                flag_tallies,
                summary_flags,
                attendance_rate: rate,
                records: days,
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        (a.display_name.as_str(), a.worker_key.as_str())
            .cmp(&(b.display_name.as_str(), b.worker_key.as_str()))
    });
    summaries
}
