//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! usable configuration:
//!
//! ```toml
//! academic_year = "2026-2027"
//! day_start = "07:00"
//! day_end = "17:00"
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};
use crate::time::{self, TimeSlot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Label reported on weekly schedules.
    #[serde(default = "default_academic_year")]
    pub academic_year: String,
    /// Start of the school day, used when computing free periods.
    #[serde(default = "default_day_start", with = "time::hhmm")]
    pub day_start: NaiveTime,
    #[serde(default = "default_day_end", with = "time::hhmm")]
    pub day_end: NaiveTime,
}

fn default_academic_year() -> String {
    "2025-2026".to_string()
}

const DAY_START: NaiveTime = match NaiveTime::from_hms_opt(7, 0, 0) {
    Some(t) => t,
    None => panic!("invalid default day_start"),
};

const DAY_END: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(t) => t,
    None => panic!("invalid default day_end"),
};

fn default_day_start() -> NaiveTime {
    DAY_START
}

fn default_day_end() -> NaiveTime {
    DAY_END
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            academic_year: default_academic_year(),
            day_start: default_day_start(),
            day_end: default_day_end(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| TimetableError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `TimetableError::Config` if the file cannot be read, cannot be
    /// parsed, or describes an empty school day.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TimetableError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.school_day().map(|_| ()).map_err(|_| {
            TimetableError::Config(format!(
                "day_start {} must be before day_end {}",
                time::format_hhmm(self.day_start),
                time::format_hhmm(self.day_end)
            ))
        })
    }

    /// The school-day window as a time slot.
    pub fn school_day(&self) -> Result<TimeSlot> {
        TimeSlot::new(self.day_start, self.day_end)
    }
}
