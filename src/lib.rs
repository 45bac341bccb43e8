//! Attendance reconciliation engine for multi-source workforce records.
//!
//! This crate merges daily attendance records from four heterogeneous
//! source feeds (time-on-site, driving history, activity detail, and
//! timecards), normalizes their identity, date, and time formats, and
//! classifies each worker's day against a configurable shift schedule.
//! Classified days roll up into weekly per-worker summaries with anomaly
//! flags and an attendance rate.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod reconcile;
