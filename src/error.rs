//! Error types for the attendance reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during reconciliation.

use thiserror::Error;

/// The main error type for the attendance reconciliation engine.
///
/// Normalization errors (`DateParseError`, `TimeParseError`,
/// `MissingJoinKey`) are recoverable: the merger drops the offending raw
/// record into the run diagnostics and keeps going. Configuration errors
/// surface at load time, before any records are processed.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::DateParseError {
///     value: "31/31/2025".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unrecognized date format: '31/31/2025'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A raw date string matched none of the accepted formats.
    #[error("Unrecognized date format: '{value}'")]
    DateParseError {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A raw time-of-day string matched none of the accepted formats.
    #[error("Unrecognized time format: '{value}'")]
    TimeParseError {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A raw record's worker identifier normalized to nothing usable.
    #[error("Record has no usable worker key (raw identifier '{raw_id}')")]
    MissingJoinKey {
        /// The raw worker identifier before normalization.
        raw_id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but failed semantic validation.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
