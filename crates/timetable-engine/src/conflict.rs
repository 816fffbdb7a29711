//! Detect double-booked teachers, rooms and classes in a weekly timetable.
//!
//! Two entries overlap when they fall on the same day and their time slots
//! satisfy `a.start < b.end && b.start < a.end`. Back-to-back sessions (one ends
//! exactly when the next starts) are NOT conflicts. Each overlapping pair is
//! then classified by the field the two entries share.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::ScheduleEntry;

/// Which resource is double-booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Teacher,
    Room,
    Class,
}

/// A detected conflict between a candidate entry and an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub kind: ConflictKind,
    pub message: String,
    pub candidate: ScheduleEntry,
    pub existing: ScheduleEntry,
    pub overlap_minutes: i64,
}

/// Lazily yield every conflict between `candidate` and the `existing` entries.
///
/// Existing entries are scanned in order; an entry with the candidate's own id is
/// skipped. For each overlapping entry the teacher, room and class checks run
/// independently, so one entry can yield up to three conflicts.
///
/// Validity windows are not consulted here. Callers that care about dates filter
/// `existing` first (the store does).
pub fn check_conflicts<'a>(
    candidate: &'a ScheduleEntry,
    existing: &'a [ScheduleEntry],
) -> impl Iterator<Item = Conflict> + 'a {
    existing
        .iter()
        .filter(move |e| {
            e.id != candidate.id
                && e.day_of_week == candidate.day_of_week
                && e.time_slot.overlaps(&candidate.time_slot)
        })
        .flat_map(move |e| classify(candidate, e))
}

/// Audit a whole collection: every unordered pair is compared once.
///
/// Pairs whose validity windows never intersect are skipped, since they can
/// never be in session at the same time. Within a pair the later entry plays
/// the candidate role.
pub fn find_all_conflicts(entries: &[ScheduleEntry]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, later) in entries.iter().enumerate() {
        let earlier: Vec<ScheduleEntry> = entries[..i]
            .iter()
            .filter(|e| e.window_overlaps(later))
            .cloned()
            .collect();
        conflicts.extend(check_conflicts(later, &earlier));
    }

    debug!(
        entries = entries.len(),
        conflicts = conflicts.len(),
        "audited timetable"
    );
    conflicts
}

fn classify(candidate: &ScheduleEntry, existing: &ScheduleEntry) -> Vec<Conflict> {
    let overlap_minutes = candidate.time_slot.overlap_minutes(&existing.time_slot);
    let when = format!("{} {}", existing.day_of_week, existing.time_slot);
    let mut found = Vec::with_capacity(3);

    if candidate.teacher_id == existing.teacher_id {
        found.push((
            ConflictKind::Teacher,
            format!(
                "Teacher {} is already teaching {} ({}) on {}",
                existing.teacher_name, existing.subject_name, existing.class_name, when
            ),
        ));
    }
    if candidate.same_room(existing) {
        found.push((
            ConflictKind::Room,
            format!(
                "Room {} ({}) is already booked for {} ({}) on {}",
                existing.room_number,
                existing.location,
                existing.subject_name,
                existing.class_name,
                when
            ),
        ));
    }
    if candidate.class_name == existing.class_name {
        found.push((
            ConflictKind::Class,
            format!(
                "Class {} already has {} on {}",
                existing.class_name, existing.subject_name, when
            ),
        ));
    }

    found
        .into_iter()
        .map(|(kind, message)| Conflict {
            kind,
            message,
            candidate: candidate.clone(),
            existing: existing.clone(),
            overlap_minutes,
        })
        .collect()
}
