//! Wall-clock primitives for the weekly grid: teaching days and time slots.
//!
//! Times are `chrono::NaiveTime` values parsed from zero-padded 24-hour `"HH:MM"`
//! text. They are compared as times, never as strings.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

/// One of the six teaching days, Monday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl SchoolDay {
    /// All teaching days in week order.
    pub const ALL: [SchoolDay; 6] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
        SchoolDay::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchoolDay::Monday => "Monday",
            SchoolDay::Tuesday => "Tuesday",
            SchoolDay::Wednesday => "Wednesday",
            SchoolDay::Thursday => "Thursday",
            SchoolDay::Friday => "Friday",
            SchoolDay::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchoolDay {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(SchoolDay::Monday),
            "tuesday" | "tue" => Ok(SchoolDay::Tuesday),
            "wednesday" | "wed" => Ok(SchoolDay::Wednesday),
            "thursday" | "thu" => Ok(SchoolDay::Thursday),
            "friday" | "fri" => Ok(SchoolDay::Friday),
            "saturday" | "sat" => Ok(SchoolDay::Saturday),
            _ => Err(TimetableError::InvalidDay(s.to_string())),
        }
    }
}

impl From<SchoolDay> for Weekday {
    fn from(day: SchoolDay) -> Self {
        match day {
            SchoolDay::Monday => Weekday::Mon,
            SchoolDay::Tuesday => Weekday::Tue,
            SchoolDay::Wednesday => Weekday::Wed,
            SchoolDay::Thursday => Weekday::Thu,
            SchoolDay::Friday => Weekday::Fri,
            SchoolDay::Saturday => Weekday::Sat,
        }
    }
}

impl TryFrom<Weekday> for SchoolDay {
    type Error = TimetableError;

    fn try_from(day: Weekday) -> Result<Self> {
        match day {
            Weekday::Mon => Ok(SchoolDay::Monday),
            Weekday::Tue => Ok(SchoolDay::Tuesday),
            Weekday::Wed => Ok(SchoolDay::Wednesday),
            Weekday::Thu => Ok(SchoolDay::Thursday),
            Weekday::Fri => Ok(SchoolDay::Friday),
            Weekday::Sat => Ok(SchoolDay::Saturday),
            Weekday::Sun => Err(TimetableError::InvalidDay("sunday".to_string())),
        }
    }
}

/// Parse a zero-padded 24-hour `"HH:MM"` time.
///
/// # Errors
/// Returns `TimetableError::InvalidTime` for anything else, including unpadded
/// hours such as `"7:30"` and times carrying seconds.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(TimetableError::InvalidTime(s.to_string()));
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| TimetableError::InvalidTime(s.to_string()))
}

/// Format a time as `"HH:MM"`.
pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Serde adapter for `NaiveTime` fields stored as `"HH:MM"`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(de::Error::custom)
    }
}

/// A half-open wall-clock range `[start, end)` within a single day.
///
/// Construction guarantees `start < end` with both bounds on whole minutes;
/// ranges crossing midnight are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot", into = "RawTimeSlot")]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

#[derive(Serialize, Deserialize)]
struct RawTimeSlot {
    #[serde(with = "hhmm")]
    start: NaiveTime,
    #[serde(with = "hhmm")]
    end: NaiveTime,
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = TimetableError;

    fn try_from(raw: RawTimeSlot) -> Result<Self> {
        TimeSlot::new(raw.start, raw.end)
    }
}

impl From<TimeSlot> for RawTimeSlot {
    fn from(slot: TimeSlot) -> Self {
        RawTimeSlot {
            start: slot.start,
            end: slot.end,
        }
    }
}

impl TimeSlot {
    /// # Errors
    /// - `TimetableError::InvalidTime` if either bound is not a whole minute.
    /// - `TimetableError::InvalidTimeSlot` unless `start < end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        whole_minute(start)?;
        whole_minute(end)?;
        if start >= end {
            return Err(TimetableError::InvalidTimeSlot { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a slot from two `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_hhmm(start)?, parse_hhmm(end)?)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open overlap test. Touching slots (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Minutes shared with `other`, zero when the slots do not overlap.
    pub fn overlap_minutes(&self, other: &TimeSlot) -> i64 {
        if !self.overlaps(other) {
            return 0;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (end - start).num_minutes()
    }
}

/// Slots live on the `HH:MM` grid; seconds would not survive a save/load.
fn whole_minute(t: NaiveTime) -> Result<()> {
    if t.second() != 0 || t.nanosecond() != 0 {
        return Err(TimetableError::InvalidTime(t.format("%H:%M:%S%.f").to_string()));
    }
    Ok(())
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_hhmm(self.start), format_hhmm(self.end))
    }
}

impl FromStr for TimeSlot {
    type Err = TimetableError;

    /// Parse `"HH:MM-HH:MM"`.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| TimetableError::InvalidTime(s.to_string()))?;
        TimeSlot::parse(start.trim(), end.trim())
    }
}
