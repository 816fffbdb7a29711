//! Aggregated timetable views: a class's week and a teacher's load.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::ScheduleEntry;
use crate::error::{Result, TimetableError};
use crate::time::SchoolDay;

/// One class's sessions for a week, grouped by teaching day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub class_name: String,
    pub academic_year: String,
    pub week_start_date: NaiveDate,
    /// Always holds all six days; a day without sessions maps to an empty list.
    pub days: BTreeMap<SchoolDay, Vec<ScheduleEntry>>,
    pub total_hours_per_week: f64,
    pub subjects_count: usize,
    pub teachers_count: usize,
}

impl WeeklySchedule {
    pub fn day(&self, day: SchoolDay) -> &[ScheduleEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Hours taught for one class/subject pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSubjectHours {
    pub class_name: String,
    pub subject_name: String,
    pub hours: f64,
}

/// A teacher's full weekly load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSchedule {
    pub teacher_id: String,
    pub teacher_name: String,
    /// Sorted by day, then start time.
    pub entries: Vec<ScheduleEntry>,
    pub total_hours_per_week: f64,
    /// Sorted by class name, then subject name.
    pub breakdown: Vec<ClassSubjectHours>,
}

/// Sum of session durations, in hours.
pub fn total_hours<'a>(entries: impl IntoIterator<Item = &'a ScheduleEntry>) -> f64 {
    let minutes: i64 = entries.into_iter().map(ScheduleEntry::duration_minutes).sum();
    minutes_to_hours(minutes)
}

fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

fn sort_key(e: &ScheduleEntry) -> (SchoolDay, chrono::NaiveTime, chrono::NaiveTime) {
    (e.day_of_week, e.time_slot.start(), e.time_slot.end())
}

/// Build the weekly view for `class_name` from entries active on `week_start`.
pub fn class_weekly_schedule(
    entries: &[ScheduleEntry],
    class_name: &str,
    week_start: NaiveDate,
    academic_year: &str,
) -> WeeklySchedule {
    let selected: Vec<&ScheduleEntry> = entries
        .iter()
        .filter(|e| e.class_name == class_name && e.is_active_on(week_start))
        .collect();

    let mut days: BTreeMap<SchoolDay, Vec<ScheduleEntry>> =
        SchoolDay::ALL.iter().map(|d| (*d, Vec::new())).collect();
    for e in &selected {
        days.entry(e.day_of_week).or_default().push((*e).clone());
    }
    for day_entries in days.values_mut() {
        day_entries.sort_by_key(sort_key);
    }

    let subjects: HashSet<&str> = selected.iter().map(|e| e.subject_id.as_str()).collect();
    let teachers: HashSet<&str> = selected.iter().map(|e| e.teacher_id.as_str()).collect();
    let total_hours_per_week = total_hours(selected.iter().copied());

    debug!(
        class = class_name,
        %week_start,
        sessions = selected.len(),
        "built weekly schedule"
    );

    WeeklySchedule {
        class_name: class_name.to_string(),
        academic_year: academic_year.to_string(),
        week_start_date: week_start,
        days,
        total_hours_per_week,
        subjects_count: subjects.len(),
        teachers_count: teachers.len(),
    }
}

/// Build the load view for `teacher_id`.
///
/// # Errors
/// Returns `TimetableError::NotFound` when the teacher has no entries.
pub fn teacher_schedule(entries: &[ScheduleEntry], teacher_id: &str) -> Result<TeacherSchedule> {
    let mut mine: Vec<ScheduleEntry> = entries
        .iter()
        .filter(|e| e.teacher_id == teacher_id)
        .cloned()
        .collect();

    let teacher_name = match mine.first() {
        Some(e) => e.teacher_name.clone(),
        None => {
            return Err(TimetableError::NotFound(format!(
                "no schedule entries for teacher {}",
                teacher_id
            )))
        }
    };

    mine.sort_by_key(sort_key);

    let mut per_pair: BTreeMap<(String, String), i64> = BTreeMap::new();
    for e in &mine {
        *per_pair
            .entry((e.class_name.clone(), e.subject_name.clone()))
            .or_insert(0) += e.duration_minutes();
    }
    let breakdown = per_pair
        .into_iter()
        .map(|((class_name, subject_name), minutes)| ClassSubjectHours {
            class_name,
            subject_name,
            hours: minutes_to_hours(minutes),
        })
        .collect();

    Ok(TeacherSchedule {
        teacher_id: teacher_id.to_string(),
        teacher_name,
        total_hours_per_week: total_hours(&mine),
        entries: mine,
        breakdown,
    })
}
