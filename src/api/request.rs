//! Request types for the attendance reconciliation API.
//!
//! This module defines the JSON request structures for the `/reconcile`
//! endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RawSourceRecord, ReportingWindow, SourceKind};

/// Request body for the `/reconcile` endpoint.
///
/// Carries one batch of raw feed records, any mix of source kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The raw records to reconcile.
    pub records: Vec<RawRecordRequest>,
}

/// Request body for the `/reconcile/weekly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRequest {
    /// The reporting window to roll up.
    pub window: WindowRequest,
    /// The raw records to reconcile before rolling up.
    pub records: Vec<RawRecordRequest>,
}

/// Reporting window in a weekly request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRequest {
    /// The first date of the window (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the window (inclusive).
    pub end_date: NaiveDate,
}

/// One raw feed record in a reconcile request.
///
/// Identity and time fields arrive as the raw strings the feed exported;
/// the engine normalizes them. A record missing both identity fields is
/// accepted here and dropped into diagnostics during the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecordRequest {
    /// Which feed produced the record.
    pub source: SourceKind,
    /// The display name as the feed exported it.
    #[serde(default)]
    pub display_name: String,
    /// The raw worker identifier as the feed exported it.
    #[serde(default)]
    pub worker_id: String,
    /// The raw date string.
    pub date: String,
    /// The raw start-of-day time string, if the feed reported one.
    #[serde(default)]
    pub start_time: Option<String>,
    /// The raw end-of-day time string, if the feed reported one.
    #[serde(default)]
    pub end_time: Option<String>,
    /// The job-site label, if the feed reported one.
    #[serde(default)]
    pub job_site: Option<String>,
    /// Reported hours; meaningful only on timecard records.
    #[serde(default)]
    pub reported_hours: Option<Decimal>,
}

impl From<RawRecordRequest> for RawSourceRecord {
    fn from(req: RawRecordRequest) -> Self {
        RawSourceRecord {
            source: req.source,
            display_name: req.display_name,
            worker_id: req.worker_id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            job_site: req.job_site,
            reported_hours: req.reported_hours,
        }
    }
}

impl From<WindowRequest> for ReportingWindow {
    fn from(req: WindowRequest) -> Self {
        ReportingWindow {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}
