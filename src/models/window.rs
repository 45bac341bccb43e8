//! Reporting window model.
//!
//! This module contains the [`ReportingWindow`] type that bounds a weekly
//! aggregation run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range over which daily records are rolled up.
///
/// Windows are usually seven days (a work week) but the aggregator accepts
/// any inclusive range.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportingWindow;
/// use chrono::NaiveDate;
///
/// let window = ReportingWindow {
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
/// };
///
/// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()));
/// assert!(!window.contains_date(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    /// The first date of the window (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the window (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingWindow {
    /// Checks if a given date falls within this window.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Arguments
    ///
    /// * `date` - The date to check.
    ///
    /// # Returns
    ///
    /// `true` if the date is within the window (inclusive), `false` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::ReportingWindow;
    /// use chrono::NaiveDate;
    ///
    /// let window = ReportingWindow {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
    /// };
    ///
    /// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())); // start date
    /// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap())); // end date
    /// assert!(!window.contains_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())); // before
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the window's end does not precede its start.
    ///
    /// The HTTP boundary rejects inverted windows before running the
    /// aggregator.
    pub fn is_valid(&self) -> bool {
        self.end_date >= self.start_date
    }
}
