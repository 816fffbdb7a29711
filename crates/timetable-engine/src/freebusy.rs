//! Compute free periods in a teaching day.
//!
//! Collects the slots of the entries that fall on the requested day, merges
//! overlapping busy periods, then returns the gaps between merged periods inside
//! the school-day window.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::entry::ScheduleEntry;
use crate::time::{SchoolDay, TimeSlot};

/// A free period within the school day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreePeriod {
    #[serde(with = "crate::time::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "crate::time::hhmm")]
    pub end: NaiveTime,
    pub duration_minutes: i64,
}

impl FreePeriod {
    fn between(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// Merge overlapping or adjacent busy periods on `day`, clipped to `window`.
///
/// Returns a sorted, non-overlapping list of (start, end) intervals.
pub fn merge_busy_periods<'a>(
    entries: impl IntoIterator<Item = &'a ScheduleEntry>,
    day: SchoolDay,
    window: TimeSlot,
) -> Vec<(NaiveTime, NaiveTime)> {
    // Collect the day's slots clipped to the window, discarding slots entirely outside.
    let mut intervals: Vec<(NaiveTime, NaiveTime)> = entries
        .into_iter()
        .filter(|e| e.day_of_week == day && e.time_slot.overlaps(&window))
        .map(|e| {
            (
                e.time_slot.start().max(window.start()),
                e.time_slot.end().min(window.end()),
            )
        })
        .collect();

    // Sort by start time (then by end time for stability).
    intervals.sort();

    let mut merged: Vec<(NaiveTime, NaiveTime)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or back-to-back: extend the current interval.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Find the free periods on `day` inside `window`, given the busy entries.
///
/// Entries on other days are ignored. Returns periods sorted by start time.
pub fn find_free_periods<'a>(
    entries: impl IntoIterator<Item = &'a ScheduleEntry>,
    day: SchoolDay,
    window: TimeSlot,
) -> Vec<FreePeriod> {
    let merged = merge_busy_periods(entries, day, window);

    let mut free = Vec::new();
    let mut cursor = window.start();

    for (busy_start, busy_end) in merged {
        if cursor < busy_start {
            free.push(FreePeriod::between(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing free period after the last busy interval.
    if cursor < window.end() {
        free.push(FreePeriod::between(cursor, window.end()));
    }

    free
}

/// First free period on `day` lasting at least `min_duration_minutes`.
pub fn find_first_free_period<'a>(
    entries: impl IntoIterator<Item = &'a ScheduleEntry>,
    day: SchoolDay,
    window: TimeSlot,
    min_duration_minutes: i64,
) -> Option<FreePeriod> {
    find_free_periods(entries, day, window)
        .into_iter()
        .find(|p| p.duration_minutes >= min_duration_minutes)
}
