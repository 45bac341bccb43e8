//! Attendance classification.
//!
//! Classifies one merged record against the configured shift schedule.
//! The classifier is a total function: every record shape, including an
//! all-empty one, resolves to exactly one status with a human-readable
//! reason and an ordered set of anomaly flags.

use rust_decimal::Decimal;

use crate::config::ShiftSchedule;
use crate::models::{AnomalyFlag, AttendanceStatus, ClassificationOutcome, CombinedAttendanceRecord};

fn push_flag(flags: &mut Vec<AnomalyFlag>, flag: AnomalyFlag) {
    if !flags.contains(&flag) {
        flags.push(flag);
    }
}

fn fmt_time(time: chrono::NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn fmt_hours(hours: Decimal) -> Decimal {
    hours.round_dp(2).normalize()
}

/// Case-insensitive containment in either direction. "Depot 12" and
/// "DEPOT 12 North" describe the same site; "Riverside Depot" and
/// "Central Yard" do not.
fn sites_agree(resolved: &str, reported: &str) -> bool {
    let resolved = resolved.to_lowercase();
    let reported = reported.to_lowercase();
    resolved.contains(&reported) || reported.contains(&resolved)
}

/// Classifies a merged attendance record against a shift schedule.
///
/// The decision sequence runs in a fixed order, each step refining the
/// tentative status and appending flags:
///
/// 1. No start, no end, and no positive timecard hours is a `no_show`.
/// 2. A present start time decides punctuality: on or before the standard
///    start is on time; within the grace period is on time with a
///    `within_grace_period` flag; after the late threshold is `late`.
/// 3. A departure with no arrival is `unclassified` with `missing_time_in`.
/// 4. An end before the early-end cutoff flags `early_departure` and
///    demotes an on-time tentative to `early_end`; a `late` tentative is
///    never overridden, the worse single infraction keeps the status.
/// 5. A computed duration under the minimum flags `insufficient_hours`
///    and demotes an on-time tentative to `early_end`; a capped overnight
///    span additionally flags `overnight_span_capped`.
/// 6. Positive timecard hours are cross-validated against the computed
///    duration, flagging `timecard_mismatch` with the direction of the
///    disagreement. This signals the span data may be wrong, not the
///    worker, so it never changes the status.
/// 7. Disagreeing job-site labels flag `job_site_mismatch`, flags only.
///
/// Flags are appended in decision order and deduplicated; the reason
/// string joins the observation segments with `; `, times rendered `HH:MM`.
///
/// # Arguments
///
/// * `record` - The merged record to classify
/// * `schedule` - Shift thresholds to classify against
///
/// # Returns
///
/// The final status, assembled reason, and ordered flag set.
///
/// # Example
///
/// ```
/// use attendance_engine::config::ShiftSchedule;
/// use attendance_engine::models::{AttendanceStatus, AnomalyFlag, CombinedAttendanceRecord};
/// use attendance_engine::reconcile::classify_record;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let mut record = CombinedAttendanceRecord::new(
///     "jane doe".to_string(),
///     "Jane Doe".to_string(),
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
/// );
/// record.start_time = NaiveTime::from_hms_opt(7, 5, 0);
///
/// let outcome = classify_record(&record, &ShiftSchedule::default());
/// assert_eq!(outcome.status, AttendanceStatus::OnTime);
/// assert!(outcome.has_flag(AnomalyFlag::WithinGracePeriod));
/// ```
pub fn classify_record(
    record: &CombinedAttendanceRecord,
    schedule: &ShiftSchedule,
) -> ClassificationOutcome {
    let timecard_activity = record
        .timecard_hours
        .is_some_and(|hours| hours > Decimal::ZERO);

    // Step 1: nothing at all was recorded. Terminal.
    if record.start_time.is_none() && record.end_time.is_none() && !timecard_activity {
        return ClassificationOutcome {
            status: AttendanceStatus::NoShow,
            reason: "No activity recorded for this date".to_string(),
            flags: vec![AnomalyFlag::MissingTimeRecords],
        };
    }

    let mut status = AttendanceStatus::Unclassified;
    let mut reasons: Vec<String> = Vec::new();
    let mut flags: Vec<AnomalyFlag> = Vec::new();

    // Steps 2 and 3: punctuality from the arrival time, or its absence.
    match (record.start_time, record.end_time) {
        (Some(start), _) => {
            if start <= schedule.standard_start {
                status = AttendanceStatus::OnTime;
                reasons.push(format!(
                    "Arrived at {}, on or before the {} standard start",
                    fmt_time(start),
                    fmt_time(schedule.standard_start)
                ));
            } else if start <= schedule.late_threshold {
                status = AttendanceStatus::OnTime;
                push_flag(&mut flags, AnomalyFlag::WithinGracePeriod);
                reasons.push(format!(
                    "Arrived at {}, within the grace period ending {}",
                    fmt_time(start),
                    fmt_time(schedule.late_threshold)
                ));
            } else {
                status = AttendanceStatus::Late;
                push_flag(&mut flags, AnomalyFlag::LateArrival);
                reasons.push(format!(
                    "Arrived at {}, after the {} late arrival threshold",
                    fmt_time(start),
                    fmt_time(schedule.late_threshold)
                ));
            }
        }
        (None, Some(end)) => {
            status = AttendanceStatus::Unclassified;
            push_flag(&mut flags, AnomalyFlag::MissingTimeIn);
            reasons.push(format!(
                "Missing arrival time (departure recorded at {})",
                fmt_time(end)
            ));
        }
        (None, None) => {
            // Timecard hours with no site times: nothing to measure
            // against the schedule.
            status = AttendanceStatus::Unclassified;
            reasons.push("Timecard hours reported without site time records".to_string());
        }
    }

    // Step 4: early departure when both times are known.
    if let (Some(_), Some(end)) = (record.start_time, record.end_time) {
        if end < schedule.early_end_cutoff {
            push_flag(&mut flags, AnomalyFlag::EarlyDeparture);
            reasons.push(format!(
                "Left at {}, before the {} early end cutoff",
                fmt_time(end),
                fmt_time(schedule.early_end_cutoff)
            ));
            if status == AttendanceStatus::OnTime {
                status = AttendanceStatus::EarlyEnd;
            }
        }
    }

    // Step 5: computed duration against the minimum.
    if let Some(duration) = record.duration {
        if duration.hours < schedule.minimum_hours {
            push_flag(&mut flags, AnomalyFlag::InsufficientHours);
            reasons.push(format!(
                "Worked {} hours, less than the {} minimum",
                fmt_hours(duration.hours),
                schedule.minimum_hours
            ));
            if status == AttendanceStatus::OnTime {
                status = AttendanceStatus::EarlyEnd;
            }
        }
        if duration.capped {
            push_flag(&mut flags, AnomalyFlag::OvernightSpanCapped);
        }
    }

    // Step 6: cross-validate against reported timecard hours.
    if let Some(reported) = record.timecard_hours.filter(|hours| *hours > Decimal::ZERO) {
        if let Some(duration) = record.duration {
            if reported >= schedule.minimum_hours && duration.hours < schedule.minimum_hours {
                push_flag(&mut flags, AnomalyFlag::TimecardMismatch);
                push_flag(&mut flags, AnomalyFlag::TimecardShowsSufficientHours);
            }
        }
        if reported < schedule.minimum_hours
            && status == AttendanceStatus::OnTime
            && !flags.contains(&AnomalyFlag::InsufficientHours)
        {
            push_flag(&mut flags, AnomalyFlag::TimecardMismatch);
            push_flag(&mut flags, AnomalyFlag::TimecardShowsInsufficientHours);
        }
    }

    // Step 7: cross-validate job-site labels. Flags only.
    if let (Some(resolved), Some(reported)) = (&record.job_site, &record.timecard_job_site) {
        if !sites_agree(resolved, reported) {
            push_flag(&mut flags, AnomalyFlag::JobSiteMismatch);
        }
    }

    ClassificationOutcome {
        status,
        reason: reasons.join("; "),
        flags,
    }
}
