//! Tests for `HH:MM` parsing, time slots and teaching days.

use chrono::{NaiveTime, Weekday};
use timetable_engine::time::{format_hhmm, parse_hhmm};
use timetable_engine::{SchoolDay, TimeSlot, TimetableError};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn parses_zero_padded_times() {
    assert_eq!(parse_hhmm("07:30").unwrap(), t(7, 30));
    assert_eq!(parse_hhmm("23:59").unwrap(), t(23, 59));
    assert_eq!(format_hhmm(t(8, 5)), "08:05");
}

#[test]
fn rejects_malformed_times() {
    for bad in ["7:30", "07:30:00", "24:00", "07:60", "0730", "", "ab:cd"] {
        assert!(
            matches!(parse_hhmm(bad), Err(TimetableError::InvalidTime(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn slot_requires_start_before_end() {
    assert!(TimeSlot::parse("08:00", "08:45").is_ok());
    assert!(matches!(
        TimeSlot::parse("09:00", "09:00"),
        Err(TimetableError::InvalidTimeSlot { .. })
    ));
    // Crossing midnight is not a valid single-day slot.
    assert!(matches!(
        TimeSlot::parse("23:00", "01:00"),
        Err(TimetableError::InvalidTimeSlot { .. })
    ));
}

#[test]
fn slot_bounds_must_be_whole_minutes() {
    let half_minute = NaiveTime::from_hms_opt(8, 0, 30).unwrap();
    let with_nanos = NaiveTime::from_hms_nano_opt(8, 0, 0, 1).unwrap();

    assert!(matches!(
        TimeSlot::new(t(8, 0), half_minute),
        Err(TimetableError::InvalidTime(_))
    ));
    assert!(matches!(
        TimeSlot::new(half_minute, t(9, 0)),
        Err(TimetableError::InvalidTime(_))
    ));
    assert!(matches!(
        TimeSlot::new(with_nanos, t(9, 0)),
        Err(TimetableError::InvalidTime(_))
    ));
}

#[test]
fn constructed_slot_survives_json_save_and_load() {
    let slot = TimeSlot::new(t(8, 0), t(8, 1)).unwrap();

    let json = serde_json::to_string(&slot).unwrap();
    let back: TimeSlot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, slot);
    assert_eq!(back.duration_minutes(), 1);
}

#[test]
fn slot_compares_as_time_not_text() {
    let slot = TimeSlot::parse("09:50", "10:05").unwrap();
    assert_eq!(slot.duration_minutes(), 15);
}

#[test]
fn overlap_is_half_open() {
    let a = TimeSlot::parse("08:00", "09:00").unwrap();
    let touching = TimeSlot::parse("09:00", "10:00").unwrap();
    let overlapping = TimeSlot::parse("08:45", "10:00").unwrap();

    assert!(!a.overlaps(&touching));
    assert_eq!(a.overlap_minutes(&touching), 0);
    assert!(a.overlaps(&overlapping));
    assert_eq!(a.overlap_minutes(&overlapping), 15);
}

#[test]
fn slot_display_and_from_str() {
    let slot: TimeSlot = "07:30-08:20".parse().unwrap();
    assert_eq!(slot.start(), t(7, 30));
    assert_eq!(slot.to_string(), "07:30-08:20");
    assert!("07:30".parse::<TimeSlot>().is_err());
}

#[test]
fn slot_serializes_as_hhmm_pair() {
    let slot = TimeSlot::parse("07:30", "08:20").unwrap();
    let json = serde_json::to_string(&slot).unwrap();
    assert_eq!(json, r#"{"start":"07:30","end":"08:20"}"#);
}

#[test]
fn inverted_slot_rejected_on_deserialize() {
    let result: Result<TimeSlot, _> = serde_json::from_str(r#"{"start":"10:00","end":"09:00"}"#);
    assert!(result.is_err());
}

#[test]
fn school_days_are_ordered_monday_to_saturday() {
    assert_eq!(SchoolDay::ALL.len(), 6);
    assert!(SchoolDay::Monday < SchoolDay::Saturday);
    assert_eq!(SchoolDay::ALL[5], SchoolDay::Saturday);
}

#[test]
fn school_day_parsing_and_weekday_conversion() {
    assert_eq!("Tuesday".parse::<SchoolDay>().unwrap(), SchoolDay::Tuesday);
    assert_eq!("sat".parse::<SchoolDay>().unwrap(), SchoolDay::Saturday);
    assert!("sunday".parse::<SchoolDay>().is_err());

    assert_eq!(Weekday::from(SchoolDay::Friday), Weekday::Fri);
    assert_eq!(SchoolDay::try_from(Weekday::Wed).unwrap(), SchoolDay::Wednesday);
    assert!(SchoolDay::try_from(Weekday::Sun).is_err());
}

#[test]
fn school_day_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&SchoolDay::Monday).unwrap(), r#""monday""#);
}
