//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, ShiftSchedule, SourcePriority};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them, and hands the resulting [`EngineConfig`] to the
/// reconciliation pipeline.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/attendance/
/// ├── schedule.yaml   # Shift-expectation thresholds
/// └── sources.yaml    # Source priority order and date-order hint
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance").unwrap();
/// println!("Minimum hours: {}", loader.schedule().minimum_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/attendance")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - The loaded configuration fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/attendance")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<ShiftSchedule>(&schedule_path)?;

        let sources_path = path.join("sources.yaml");
        let sources = Self::load_yaml::<SourcePriority>(&sources_path)?;

        let config = EngineConfig { schedule, sources };
        config.validate()?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the shift-expectation thresholds.
    pub fn schedule(&self) -> &ShiftSchedule {
        &self.config.schedule
    }

    /// Returns the source precedence and date-order settings.
    pub fn sources(&self) -> &SourcePriority {
        &self.config.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceKind;
    use crate::normalize::DateOrder;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/attendance"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.schedule().standard_start,
            NaiveTime::from_hms_opt(7, 0, 0).unwrap()
        );
        assert_eq!(
            loader.schedule().late_threshold,
            NaiveTime::from_hms_opt(7, 15, 0).unwrap()
        );
        assert_eq!(loader.schedule().minimum_hours, dec("8.0"));
    }

    #[test]
    fn test_loaded_priority_matches_shipped_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.sources().rank(SourceKind::TimeOnSite), 0);
        assert_eq!(loader.sources().rank(SourceKind::DrivingHistory), 1);
        assert_eq!(loader.sources().rank(SourceKind::ActivityDetail), 2);
        assert_eq!(loader.sources().rank(SourceKind::Timecard), 3);
        assert_eq!(loader.sources().date_order, DateOrder::MonthFirst);
    }

    #[test]
    fn test_loaded_config_equals_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.config(), EngineConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("schedule.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("attendance-engine-bad-config");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("schedule.yaml"), "standard_start: [not, a, time]").unwrap();
        fs::write(dir.join("sources.yaml"), "priority: []").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("schedule.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_loaded_config_is_rejected() {
        let dir = std::env::temp_dir().join("attendance-engine-short-priority");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("schedule.yaml"),
            concat!(
                "standard_start: \"07:00:00\"\n",
                "late_threshold: \"07:15:00\"\n",
                "early_end_cutoff: \"15:30:00\"\n",
                "standard_end: \"16:00:00\"\n",
                "minimum_hours: \"8.0\"\n",
            ),
        )
        .unwrap();
        fs::write(dir.join("sources.yaml"), "priority:\n  - timecard\n").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));

        fs::remove_dir_all(&dir).ok();
    }
}
