//! Schedule (solution) model.
//!
//! A scheduling run produces a [`ScheduleResult`]: the committed
//! course-classroom-slot assignments plus one [`ConflictReport`] for every
//! course that could not be placed. Every input course lands in exactly
//! one of the two collections.
//!
//! Entries and reports hold owned copies of the course and classroom
//! records, so later edits to the caller's records never leak into a
//! finished result.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{Classroom, ClockTime, Course, Day, TimeSlot};

/// A committed assignment of a course to a classroom and time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Placed course.
    pub course: Course,
    /// Hosting classroom.
    pub classroom: Classroom,
    /// Occupied slot (one of the course's preferences).
    pub time_slot: TimeSlot,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(course: Course, classroom: Classroom, time_slot: TimeSlot) -> Self {
        Self {
            course,
            classroom,
            time_slot,
        }
    }
}

/// Why a course could not be placed.
///
/// `Display` yields the caller-facing diagnostic text and `FromStr`
/// reads it back; serde uses the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// No classroom anywhere seats the course.
    NoCapacity {
        /// Seats the course asked for.
        required: u32,
    },
    /// Every preference overlaps an already placed graduate course.
    GraduateClash,
    /// Every preference overlaps another course of the same instructor.
    InstructorClash {
        /// Instructor name.
        instructor: String,
    },
    /// Catch-all: preferred rooms and times are taken.
    NoMatchingSlot,
}

impl ConflictReason {
    /// Coarse category of this reason.
    pub fn kind(&self) -> ConflictKind {
        match self {
            ConflictReason::NoCapacity { .. } => ConflictKind::Capacity,
            ConflictReason::GraduateClash => ConflictKind::Graduate,
            ConflictReason::InstructorClash { .. } => ConflictKind::Instructor,
            ConflictReason::NoMatchingSlot => ConflictKind::Time,
        }
    }
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::NoCapacity { required } => write!(
                f,
                "No classroom available with capacity for {required} students"
            ),
            ConflictReason::GraduateClash => f.write_str("Conflicts with another graduate course"),
            ConflictReason::InstructorClash { instructor } => {
                write!(f, "Instructor {instructor} has conflicting schedules")
            }
            ConflictReason::NoMatchingSlot => {
                f.write_str("No available time slots matching preferences")
            }
        }
    }
}

/// Text is not one of the diagnostic messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized conflict reason '{0}'")]
pub struct UnknownConflictReason(pub String);

impl FromStr for ConflictReason {
    type Err = UnknownConflictReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conflicts with another graduate course" => Ok(ConflictReason::GraduateClash),
            "No available time slots matching preferences" => Ok(ConflictReason::NoMatchingSlot),
            _ => {
                let capacity = s
                    .strip_prefix("No classroom available with capacity for ")
                    .and_then(|rest| rest.strip_suffix(" students"))
                    .and_then(|n| n.parse().ok())
                    .map(|required| ConflictReason::NoCapacity { required });
                let instructor = || {
                    s.strip_prefix("Instructor ")
                        .and_then(|rest| rest.strip_suffix(" has conflicting schedules"))
                        .map(|name| ConflictReason::InstructorClash {
                            instructor: name.to_string(),
                        })
                };
                capacity
                    .or_else(instructor)
                    .ok_or_else(|| UnknownConflictReason(s.to_string()))
            }
        }
    }
}

impl Serialize for ConflictReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ConflictReason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Category used to group conflicts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// Room too small everywhere.
    Capacity,
    /// Graduate exclusivity.
    Graduate,
    /// Instructor double-booking.
    Instructor,
    /// Room/time contention.
    Time,
}

/// A course the scheduler could not place, with a single best-guess reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Unplaced course.
    pub course: Course,
    /// Diagnosis.
    pub reason: ConflictReason,
}

impl ConflictReport {
    /// Creates a new report.
    pub fn new(course: Course, reason: ConflictReason) -> Self {
        Self { course, reason }
    }

    /// Category of the reason.
    #[inline]
    pub fn kind(&self) -> ConflictKind {
        self.reason.kind()
    }
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Committed entries, by start time ascending.
    pub schedule: Vec<ScheduleEntry>,
    /// Unplaced courses, in processing order.
    pub conflicts: Vec<ConflictReport>,
}

impl ScheduleResult {
    /// Number of courses that went through the run.
    pub fn total_courses(&self) -> usize {
        self.schedule.len() + self.conflicts.len()
    }

    /// Whether every course was placed.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Finds the entry for a given course.
    pub fn entry_for_course(&self, course_id: &str) -> Option<&ScheduleEntry> {
        self.schedule.iter().find(|e| e.course.id == course_id)
    }

    /// Finds the conflict report for a given course.
    pub fn conflict_for_course(&self, course_id: &str) -> Option<&ConflictReport> {
        self.conflicts.iter().find(|c| c.course.id == course_id)
    }

    /// Returns all entries hosted by a given classroom.
    pub fn entries_for_classroom(&self, classroom_id: &str) -> Vec<&ScheduleEntry> {
        self.schedule
            .iter()
            .filter(|e| e.classroom.id == classroom_id)
            .collect()
    }

    /// Returns all entries on a given day, in schedule order.
    pub fn entries_on(&self, day: Day) -> Vec<&ScheduleEntry> {
        self.schedule
            .iter()
            .filter(|e| e.time_slot.day == day)
            .collect()
    }

    /// First entry starting exactly at `start` on `day`.
    pub fn entry_at(&self, day: Day, start: ClockTime) -> Option<&ScheduleEntry> {
        self.schedule
            .iter()
            .find(|e| e.time_slot.day == day && e.time_slot.start_time == start)
    }

    /// Conflicts grouped by category, each group in processing order.
    pub fn conflicts_by_kind(&self) -> BTreeMap<ConflictKind, Vec<&ConflictReport>> {
        let mut groups: BTreeMap<ConflictKind, Vec<&ConflictReport>> = BTreeMap::new();
        for conflict in &self.conflicts {
            groups.entry(conflict.kind()).or_default().push(conflict);
        }
        groups
    }
}
