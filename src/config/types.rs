//! Configuration types for attendance reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files: the shift-expectation
//! thresholds and the source-priority ordering. Both carry defaults so the
//! pure core is usable without any files on disk.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::SourceKind;
use crate::normalize::DateOrder;

fn hms(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time literal")
}

/// Work-shift expectations used by the classifier.
///
/// Loaded from `schedule.yaml`. The thresholds are injectable because the
/// sites this engine serves run divergent cutoffs; a deployment without a
/// grace period sets `standard_start` equal to `late_threshold`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShiftSchedule {
    /// Expected arrival time.
    pub standard_start: NaiveTime,
    /// Latest arrival still counted as on-time (end of the grace period).
    pub late_threshold: NaiveTime,
    /// Departures before this time are early ends.
    pub early_end_cutoff: NaiveTime,
    /// Expected departure time.
    pub standard_end: NaiveTime,
    /// Minimum worked hours for a complete day.
    pub minimum_hours: Decimal,
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        ShiftSchedule {
            standard_start: hms(7, 0),
            late_threshold: hms(7, 15),
            early_end_cutoff: hms(15, 30),
            standard_end: hms(16, 0),
            minimum_hours: Decimal::new(8, 0),
        }
    }
}

/// Source-feed precedence and date-parsing configuration.
///
/// Loaded from `sources.yaml`. The priority list ranks the four feeds from
/// most to least trusted for time and job-site fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourcePriority {
    /// The four source kinds, highest priority first.
    pub priority: Vec<SourceKind>,
    /// Ambiguity hint for slash-separated dates in the feeds.
    #[serde(default)]
    pub date_order: DateOrder,
}

impl SourcePriority {
    /// Returns the rank of a source kind: 0 is the highest priority.
    ///
    /// A kind missing from the list ranks below every listed one; a
    /// validated configuration lists every kind exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::SourcePriority;
    /// use attendance_engine::models::SourceKind;
    ///
    /// let sources = SourcePriority::default();
    /// assert_eq!(sources.rank(SourceKind::TimeOnSite), 0);
    /// assert_eq!(sources.rank(SourceKind::Timecard), 3);
    /// ```
    pub fn rank(&self, kind: SourceKind) -> usize {
        self.priority
            .iter()
            .position(|k| *k == kind)
            .unwrap_or(usize::MAX)
    }
}

impl Default for SourcePriority {
    fn default() -> Self {
        SourcePriority {
            priority: SourceKind::ALL.to_vec(),
            date_order: DateOrder::default(),
        }
    }
}

/// The complete engine configuration.
///
/// Aggregates the shift schedule and source-priority settings. A default
/// value carries the standard thresholds and feed ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Shift-expectation thresholds.
    pub schedule: ShiftSchedule,
    /// Source precedence and date-order hint.
    pub sources: SourcePriority,
}

impl EngineConfig {
    /// Checks the configuration for internal consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` for a usable configuration, or
    /// [`EngineError::InvalidConfig`] when:
    /// - the priority list does not name each source kind exactly once
    /// - `standard_start` is after `late_threshold`
    /// - `early_end_cutoff` is after `standard_end`
    /// - `minimum_hours` is not positive
    pub fn validate(&self) -> EngineResult<()> {
        let priority = &self.sources.priority;
        if priority.len() != SourceKind::ALL.len()
            || SourceKind::ALL.iter().any(|kind| !priority.contains(kind))
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "source priority must list each of the {} source kinds exactly once",
                    SourceKind::ALL.len()
                ),
            });
        }

        if self.schedule.standard_start > self.schedule.late_threshold {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "standard_start {} is after late_threshold {}",
                    self.schedule.standard_start, self.schedule.late_threshold
                ),
            });
        }

        if self.schedule.early_end_cutoff > self.schedule.standard_end {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "early_end_cutoff {} is after standard_end {}",
                    self.schedule.early_end_cutoff, self.schedule.standard_end
                ),
            });
        }

        if self.schedule.minimum_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "minimum_hours must be positive, got {}",
                    self.schedule.minimum_hours
                ),
            });
        }

        Ok(())
    }
}
