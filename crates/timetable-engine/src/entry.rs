//! Schedule entries: one recurring weekly class session.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TimetableError};
use crate::time::{SchoolDay, TimeSlot};

/// The kind of session held in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    #[default]
    Lecture,
    /// Laboratory or other hands-on session.
    #[serde(alias = "lab")]
    Practical,
    Exercises,
    Evaluation,
}

/// The fields of a session before it is stored.
///
/// The store assigns the id and timestamps when it accepts the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub class_name: String,
    pub subject_id: String,
    pub subject_name: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub day_of_week: SchoolDay,
    pub time_slot: TimeSlot,
    pub location: String,
    pub room_number: String,
    #[serde(default)]
    pub course_type: CourseType,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl ScheduleDraft {
    /// # Errors
    /// Returns `TimetableError::InvalidValidityWindow` when `end_date` precedes
    /// `start_date`. The time slot is already valid by construction.
    pub fn validate(&self) -> Result<()> {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(TimetableError::InvalidValidityWindow {
                    start: self.start_date,
                    end,
                });
            }
        }
        Ok(())
    }

    /// Turn the draft into an entry with a fresh UUID and both timestamps set to `now`.
    pub fn into_entry(self, now: DateTime<Utc>) -> ScheduleEntry {
        ScheduleEntry {
            id: Uuid::new_v4().to_string(),
            class_name: self.class_name,
            subject_id: self.subject_id,
            subject_name: self.subject_name,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            day_of_week: self.day_of_week,
            time_slot: self.time_slot,
            location: self.location,
            room_number: self.room_number,
            course_type: self.course_type,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A stored weekly class session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub class_name: String,
    pub subject_id: String,
    pub subject_name: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub day_of_week: SchoolDay,
    pub time_slot: TimeSlot,
    pub location: String,
    pub room_number: String,
    #[serde(default)]
    pub course_type: CourseType,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduleEntry {
    /// Whether the validity window contains `date` (both bounds inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.is_none_or(|end| date <= end)
    }

    /// Whether the two validity windows share at least one day.
    pub fn window_overlaps(&self, other: &ScheduleEntry) -> bool {
        windows_overlap(
            (self.start_date, self.end_date),
            (other.start_date, other.end_date),
        )
    }

    pub fn duration_minutes(&self) -> i64 {
        self.time_slot.duration_minutes()
    }

    /// Same physical room: both location and room number match.
    pub fn same_room(&self, other: &ScheduleEntry) -> bool {
        self.location == other.location && self.room_number == other.room_number
    }
}

/// Inclusive date-window overlap; an absent end date is open-ended.
pub(crate) fn windows_overlap(
    a: (NaiveDate, Option<NaiveDate>),
    b: (NaiveDate, Option<NaiveDate>),
) -> bool {
    let a_reaches_b = a.1.is_none_or(|end| b.0 <= end);
    let b_reaches_a = b.1.is_none_or(|end| a.0 <= end);
    a_reaches_b && b_reaches_a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn open_ended_windows_always_overlap_later_windows() {
        assert!(windows_overlap((d(2026, 9, 1), None), (d(2027, 1, 1), None)));
        assert!(windows_overlap(
            (d(2026, 9, 1), None),
            (d(2020, 1, 1), Some(d(2026, 9, 1)))
        ));
    }

    #[test]
    fn disjoint_windows_do_not_overlap() {
        assert!(!windows_overlap(
            (d(2026, 9, 1), Some(d(2026, 12, 31))),
            (d(2027, 1, 1), None)
        ));
    }
}
