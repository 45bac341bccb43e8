//! Core data models for the attendance reconciliation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod outcome;
mod raw_record;
mod report;
mod summary;
mod window;

pub use attendance::CombinedAttendanceRecord;
pub use outcome::{AnomalyFlag, AttendanceStatus, ClassificationOutcome};
pub use raw_record::{RawSourceRecord, SourceKind};
pub use report::{DroppedRecord, ReconciliationReport, RunDiagnostics, WeeklyReport};
pub use summary::{StatusCounts, SummaryFlag, WeeklySummary};
pub use window::ReportingWindow;
