//! Configuration loading and management for the attendance engine.
//!
//! This module provides functionality to load engine configuration from
//! YAML files: the shift-expectation thresholds and the source-priority
//! ordering used by the reconciliation pipeline.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance").unwrap();
//! println!("Standard start: {}", config.schedule().standard_start);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, ShiftSchedule, SourcePriority};
