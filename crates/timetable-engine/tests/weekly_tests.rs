//! Tests for weekly class views and teacher load aggregation.

use chrono::{NaiveDate, TimeZone, Utc};
use timetable_engine::weekly::{class_weekly_schedule, teacher_schedule, total_hours};
use timetable_engine::{CourseType, ScheduleDraft, ScheduleEntry, SchoolDay, TimeSlot, TimetableError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(
    class_name: &str,
    subject: &str,
    teacher_id: &str,
    day: SchoolDay,
    start: &str,
    end: &str,
) -> ScheduleEntry {
    ScheduleDraft {
        class_name: class_name.to_string(),
        subject_id: subject.to_lowercase(),
        subject_name: subject.to_string(),
        teacher_id: teacher_id.to_string(),
        teacher_name: format!("Teacher {}", teacher_id),
        day_of_week: day,
        time_slot: TimeSlot::parse(start, end).unwrap(),
        location: "Main building".to_string(),
        room_number: "A-101".to_string(),
        course_type: CourseType::Lecture,
        start_date: date(2026, 9, 1),
        end_date: None,
    }
    .into_entry(Utc.with_ymd_and_hms(2026, 8, 25, 9, 0, 0).unwrap())
}

fn sample() -> Vec<ScheduleEntry> {
    vec![
        entry("6A", "Mathematics", "T1", SchoolDay::Monday, "09:00", "09:45"),
        entry("6A", "Physics", "T2", SchoolDay::Monday, "07:30", "08:15"),
        entry("6A", "Mathematics", "T1", SchoolDay::Wednesday, "07:30", "09:00"),
        entry("6B", "Mathematics", "T1", SchoolDay::Monday, "10:00", "10:45"),
        entry("6B", "Chemistry", "T3", SchoolDay::Saturday, "07:30", "08:00"),
    ]
}

// ── Class weekly schedule ──────────────────────────────────────────────────

#[test]
fn empty_class_has_six_empty_days() {
    let week = class_weekly_schedule(&sample(), "9Z", date(2026, 9, 7), "2026-2027");

    assert_eq!(week.days.len(), 6);
    for day in SchoolDay::ALL {
        assert!(week.day(day).is_empty(), "{} should be empty", day);
    }
    assert_eq!(week.total_hours_per_week, 0.0);
    assert_eq!(week.subjects_count, 0);
    assert_eq!(week.teachers_count, 0);
}

#[test]
fn class_entries_grouped_by_day_and_sorted_by_start() {
    let week = class_weekly_schedule(&sample(), "6A", date(2026, 9, 7), "2026-2027");

    let monday: Vec<&str> = week
        .day(SchoolDay::Monday)
        .iter()
        .map(|e| e.subject_name.as_str())
        .collect();
    assert_eq!(monday, vec!["Physics", "Mathematics"]);
    assert_eq!(week.day(SchoolDay::Wednesday).len(), 1);
    assert!(week.day(SchoolDay::Saturday).is_empty());
}

#[test]
fn class_totals_count_hours_subjects_and_teachers() {
    let week = class_weekly_schedule(&sample(), "6A", date(2026, 9, 7), "2026-2027");

    // 45 + 45 + 90 minutes
    assert_eq!(week.total_hours_per_week, 3.0);
    assert_eq!(week.subjects_count, 2);
    assert_eq!(week.teachers_count, 2);
    assert_eq!(week.academic_year, "2026-2027");
    assert_eq!(week.week_start_date, date(2026, 9, 7));
}

#[test]
fn entries_outside_validity_window_are_excluded() {
    let mut entries = sample();
    entries[0].end_date = Some(date(2026, 9, 5));
    entries[1].start_date = date(2026, 10, 1);

    let week = class_weekly_schedule(&entries, "6A", date(2026, 9, 7), "2026-2027");

    assert!(week.day(SchoolDay::Monday).is_empty());
    assert_eq!(week.total_hours_per_week, 1.5);
}

#[test]
fn validity_bounds_are_inclusive() {
    let mut entries = sample();
    entries[0].end_date = Some(date(2026, 9, 7));

    let week = class_weekly_schedule(&entries, "6A", date(2026, 9, 7), "2026-2027");

    assert_eq!(week.day(SchoolDay::Monday).len(), 2);
}

// ── Teacher schedule ───────────────────────────────────────────────────────

#[test]
fn teacher_schedule_sorted_by_day_then_start() {
    let schedule = teacher_schedule(&sample(), "T1").unwrap();

    let order: Vec<(SchoolDay, String)> = schedule
        .entries
        .iter()
        .map(|e| (e.day_of_week, e.time_slot.to_string()))
        .collect();
    assert_eq!(
        order,
        vec![
            (SchoolDay::Monday, "09:00-09:45".to_string()),
            (SchoolDay::Monday, "10:00-10:45".to_string()),
            (SchoolDay::Wednesday, "07:30-09:00".to_string()),
        ]
    );
    assert_eq!(schedule.teacher_name, "Teacher T1");
}

#[test]
fn teacher_breakdown_sums_per_class_and_subject() {
    let schedule = teacher_schedule(&sample(), "T1").unwrap();

    assert_eq!(schedule.total_hours_per_week, 3.0);
    assert_eq!(schedule.breakdown.len(), 2);
    assert_eq!(schedule.breakdown[0].class_name, "6A");
    assert_eq!(schedule.breakdown[0].hours, 2.25);
    assert_eq!(schedule.breakdown[1].class_name, "6B");
    assert_eq!(schedule.breakdown[1].hours, 0.75);
}

#[test]
fn unknown_teacher_is_not_found() {
    let err = teacher_schedule(&sample(), "T99").unwrap_err();
    assert!(matches!(err, TimetableError::NotFound(_)));
}

#[test]
fn total_hours_of_nothing_is_zero() {
    assert_eq!(total_hours(&[] as &[ScheduleEntry]), 0.0);
}
