//! Error types for timetable-engine operations.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::conflict::Conflict;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid time '{0}': expected zero-padded HH:MM")]
    InvalidTime(String),

    #[error("Invalid day '{0}': expected monday through saturday")]
    InvalidDay(String),

    #[error("Invalid time slot: end {end} must be after start {start}")]
    InvalidTimeSlot { start: NaiveTime, end: NaiveTime },

    #[error("Invalid validity window: end date {end} is before start date {start}")]
    InvalidValidityWindow { start: NaiveDate, end: NaiveDate },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// An insert rejected because it overlaps existing entries.
///
/// Displays as the first detected conflict's message; the complete list stays
/// available through [`ConflictError::conflicts`].
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ConflictError {
    message: String,
    conflicts: Vec<Conflict>,
}

impl ConflictError {
    /// Wrap a non-empty list of conflicts. Returns `None` for an empty list.
    pub fn new(conflicts: Vec<Conflict>) -> Option<Self> {
        let message = conflicts.first()?.message.clone();
        Some(Self { message, conflicts })
    }

    /// The first detected conflict, the one reported in the message.
    pub fn first(&self) -> &Conflict {
        &self.conflicts[0]
    }

    /// Every conflict found for the rejected insert, in scan order.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
