//! # timetable-engine
//!
//! Conflict detection and aggregation for a weekly school timetable.
//!
//! A timetable is a set of recurring sessions, each tying a class, subject,
//! teacher and room to a time slot on one of six teaching days. The engine
//! refuses inserts that double-book a teacher, room or class, and builds the
//! per-class and per-teacher weekly views.
//!
//! ## Modules
//!
//! - [`time`] - teaching days and `HH:MM` time slots
//! - [`entry`] - schedule entries and drafts
//! - [`conflict`] - teacher/room/class double-booking detection
//! - [`weekly`] - weekly class view and teacher load
//! - [`freebusy`] - free periods within the school day
//! - [`store`] - in-memory store with conflict-checked inserts
//! - [`config`] - TOML configuration
//! - [`error`] - Error types

pub mod config;
pub mod conflict;
pub mod entry;
pub mod error;
pub mod freebusy;
pub mod store;
pub mod time;
pub mod weekly;

pub use config::EngineConfig;
pub use conflict::{check_conflicts, find_all_conflicts, Conflict, ConflictKind};
pub use entry::{CourseType, ScheduleDraft, ScheduleEntry};
pub use error::{ConflictError, TimetableError};
pub use freebusy::{find_free_periods, FreePeriod};
pub use store::ScheduleStore;
pub use time::{SchoolDay, TimeSlot};
pub use weekly::{ClassSubjectHours, TeacherSchedule, WeeklySchedule};
