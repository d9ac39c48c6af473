//! Day, clock time, and time slot models.
//!
//! # Time Model
//! Times are wall-clock values within a single teaching day, stored as
//! minutes since midnight. There is no date component: a slot recurs
//! every week on its `day`.
//!
//! # Overlap
//! All ranges are half-open `[start, end)`. Two ranges overlap iff
//! `s1 < e2 && s2 < e1`, so back-to-back slots do not conflict.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors produced while parsing or constructing time values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Text is not of the form `HH:MM`.
    #[error("invalid clock time '{0}': expected HH:MM")]
    InvalidFormat(String),
    /// Hour or minute component is out of range.
    #[error("clock time '{0}' is out of range")]
    OutOfRange(String),
    /// Text does not name a teaching day.
    #[error("unknown day '{0}'")]
    UnknownDay(String),
    /// Slot does not end strictly after it starts.
    #[error("time slot {start}-{end} does not end after it starts")]
    EmptySlot {
        /// Slot start.
        start: ClockTime,
        /// Slot end.
        end: ClockTime,
    },
}

/// A teaching day.
///
/// Serialized as the English day name; deserialization accepts any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days, Monday first.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// English day name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Day {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TimeError::UnknownDay(s.to_string()))
    }
}

impl TryFrom<String> for Day {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Wall-clock time of day with minute resolution.
///
/// Serialized as a zero-padded 24-hour `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Const constructor for fixed tables. Caller keeps `hour < 24`, `minute < 60`.
    pub(crate) const fn hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Creates a time from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, TimeError> {
        if hour >= 24 || minute >= 60 {
            return Err(TimeError::OutOfRange(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::OutOfRange(minutes.to_string()));
        }
        Ok(Self(minutes))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidFormat(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).map_err(|_| TimeError::OutOfRange(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Length of this window in minutes (zero if inverted).
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, time: ClockTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A weekly time slot: a day plus a `[start, end)` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTimeSlot")]
pub struct TimeSlot {
    /// Teaching day.
    pub day: Day,
    /// Start time (inclusive).
    pub start_time: ClockTime,
    /// End time (exclusive).
    pub end_time: ClockTime,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimeSlot {
    day: Day,
    start_time: ClockTime,
    end_time: ClockTime,
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = TimeError;

    fn try_from(raw: RawTimeSlot) -> Result<Self, Self::Error> {
        TimeSlot::new(raw.day, raw.start_time, raw.end_time)
    }
}

impl TimeSlot {
    /// Creates a slot, rejecting ranges that do not end after they start.
    pub fn new(day: Day, start_time: ClockTime, end_time: ClockTime) -> Result<Self, TimeError> {
        if start_time >= end_time {
            return Err(TimeError::EmptySlot {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            day,
            start_time,
            end_time,
        })
    }

    /// Parses a slot from `HH:MM` start and end strings.
    ///
    /// ```
    /// use u_timetable::models::{Day, TimeSlot};
    ///
    /// let slot = TimeSlot::parse(Day::Monday, "08:00", "09:30").unwrap();
    /// assert_eq!(slot.duration_minutes(), 90);
    /// assert!(TimeSlot::parse(Day::Monday, "10:00", "09:00").is_err());
    /// ```
    pub fn parse(day: Day, start: &str, end: &str) -> Result<Self, TimeError> {
        Self::new(day, start.parse()?, end.parse()?)
    }

    /// The `[start, end)` range of this slot.
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.window().duration_minutes()
    }

    /// Whether two slots fall on the same day with overlapping ranges.
    pub fn collides_with(&self, other: &Self) -> bool {
        self.day == other.day && self.window().overlaps(&other.window())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start_time, self.end_time)
    }
}
