//! In-memory schedule store: conflict-checked inserts and timetable queries.
//!
//! The store owns its entries and configuration outright. Callers that need to
//! share it across threads wrap it themselves.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::conflict::{self, Conflict};
use crate::entry::{ScheduleDraft, ScheduleEntry};
use crate::error::{ConflictError, Result, TimetableError};
use crate::freebusy::{self, FreePeriod};
use crate::time::SchoolDay;
use crate::weekly::{self, TeacherSchedule, WeeklySchedule};

#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    config: EngineConfig,
    entries: Vec<ScheduleEntry>,
}

impl ScheduleStore {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Seed a store with entries as-is, without conflict checks.
    ///
    /// Meant for loading a previously saved timetable; use
    /// [`conflict::find_all_conflicts`] to audit the result.
    pub fn with_entries(config: EngineConfig, entries: Vec<ScheduleEntry>) -> Self {
        Self { config, entries }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Drop every stored entry, keeping the configuration.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Conflicts the draft would cause if it were inserted now.
    ///
    /// Only stored entries whose validity window overlaps the draft's are
    /// considered.
    pub fn preview_conflicts(&self, draft: &ScheduleDraft) -> Result<Vec<Conflict>> {
        draft.validate()?;
        let candidate = draft.clone().into_entry(Utc::now());
        Ok(self.conflicts_for(&candidate))
    }

    /// Validate and insert a new entry.
    ///
    /// # Errors
    /// - `TimetableError::InvalidValidityWindow` for a malformed draft.
    /// - `TimetableError::Conflict` when the entry would double-book a teacher,
    ///   room or class. The error message is the first conflict found; all of
    ///   them are available on the error. Nothing is stored in that case.
    pub fn add_entry(&mut self, draft: ScheduleDraft) -> Result<ScheduleEntry> {
        draft.validate()?;
        let candidate = draft.into_entry(Utc::now());

        let conflicts = self.conflicts_for(&candidate);
        if let Some(err) = ConflictError::new(conflicts) {
            warn!(
                class = %candidate.class_name,
                day = %candidate.day_of_week,
                slot = %candidate.time_slot,
                conflicts = err.conflicts().len(),
                "rejected schedule entry: {}",
                err
            );
            return Err(err.into());
        }

        info!(
            id = %candidate.id,
            class = %candidate.class_name,
            day = %candidate.day_of_week,
            slot = %candidate.time_slot,
            "added schedule entry"
        );
        self.entries.push(candidate.clone());
        Ok(candidate)
    }

    /// Remove an entry by id and return it.
    ///
    /// # Errors
    /// Returns `TimetableError::NotFound` for an unknown id.
    pub fn remove_entry(&mut self, id: &str) -> Result<ScheduleEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| TimetableError::NotFound(format!("schedule entry {}", id)))?;
        let removed = self.entries.remove(index);
        info!(id, class = %removed.class_name, "removed schedule entry");
        Ok(removed)
    }

    /// Every conflict among the stored entries.
    pub fn audit(&self) -> Vec<Conflict> {
        conflict::find_all_conflicts(&self.entries)
    }

    /// Weekly view of `class_name` for the week starting on `week_start`.
    pub fn class_weekly_schedule(&self, class_name: &str, week_start: NaiveDate) -> WeeklySchedule {
        weekly::class_weekly_schedule(
            &self.entries,
            class_name,
            week_start,
            &self.config.academic_year,
        )
    }

    /// # Errors
    /// Returns `TimetableError::NotFound` when the teacher has no entries.
    pub fn teacher_schedule(&self, teacher_id: &str) -> Result<TeacherSchedule> {
        weekly::teacher_schedule(&self.entries, teacher_id)
    }

    pub fn teacher_free_periods(&self, teacher_id: &str, day: SchoolDay) -> Result<Vec<FreePeriod>> {
        self.free_periods(day, |e| e.teacher_id == teacher_id)
    }

    pub fn room_free_periods(
        &self,
        location: &str,
        room_number: &str,
        day: SchoolDay,
    ) -> Result<Vec<FreePeriod>> {
        self.free_periods(day, |e| e.location == location && e.room_number == room_number)
    }

    pub fn class_free_periods(&self, class_name: &str, day: SchoolDay) -> Result<Vec<FreePeriod>> {
        self.free_periods(day, |e| e.class_name == class_name)
    }

    fn free_periods<F>(&self, day: SchoolDay, keep: F) -> Result<Vec<FreePeriod>>
    where
        F: Fn(&ScheduleEntry) -> bool,
    {
        let window = self.config.school_day()?;
        Ok(freebusy::find_free_periods(
            self.entries.iter().filter(|e| keep(*e)),
            day,
            window,
        ))
    }

    fn conflicts_for(&self, candidate: &ScheduleEntry) -> Vec<Conflict> {
        let in_window: Vec<ScheduleEntry> = self
            .entries
            .iter()
            .filter(|e| e.window_overlaps(candidate))
            .cloned()
            .collect();
        let conflicts: Vec<Conflict> = conflict::check_conflicts(candidate, &in_window).collect();
        debug!(
            scanned = in_window.len(),
            conflicts = conflicts.len(),
            "checked candidate entry"
        );
        conflicts
    }
}
