//! Tests for TOML configuration loading.

use std::io::Write;

use chrono::NaiveTime;
use tempfile::NamedTempFile;
use timetable_engine::{EngineConfig, TimetableError};

#[test]
fn empty_document_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();

    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.academic_year, "2025-2026");
    assert_eq!(config.day_start, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
    assert_eq!(config.day_end, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
}

#[test]
fn fields_override_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
academic_year = "2026-2027"
day_start = "07:30"
"#,
    )
    .unwrap();

    assert_eq!(config.academic_year, "2026-2027");
    assert_eq!(config.day_start, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
    assert_eq!(config.day_end, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
}

#[test]
fn inverted_school_day_rejected() {
    let err = EngineConfig::from_toml_str("day_start = \"18:00\"\nday_end = \"08:00\"").unwrap_err();
    assert!(matches!(err, TimetableError::Config(_)));
}

#[test]
fn malformed_time_rejected() {
    let err = EngineConfig::from_toml_str("day_start = \"7am\"").unwrap_err();
    assert!(matches!(err, TimetableError::Config(_)));
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "academic_year = \"2027-2028\"").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();

    assert_eq!(config.academic_year, "2027-2028");
}

#[test]
fn missing_file_is_config_error() {
    let err = EngineConfig::from_file("/nonexistent/timetable.toml").unwrap_err();
    assert!(matches!(err, TimetableError::Config(_)));
}
