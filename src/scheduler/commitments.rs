//! Committed entries and the feasibility checks run against them.
//!
//! [`Commitments`] is the append-only record of what a run has placed so
//! far. Every predicate is a read-only query over its current contents,
//! so a candidate is only ever checked against courses already placed,
//! never against courses still waiting.

use crate::models::{Classroom, Course, ScheduleEntry, TimeSlot};

/// Append-only list of entries committed during one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct Commitments {
    entries: Vec<ScheduleEntry>,
}

impl Commitments {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn commit(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Entries in commit order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the accumulator, yielding entries in commit order.
    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.entries
    }

    /// Whether `classroom` is free during `slot`.
    ///
    /// Rooms are matched by ID.
    pub fn is_room_available(&self, classroom: &Classroom, slot: &TimeSlot) -> bool {
        !self
            .entries
            .iter()
            .any(|e| e.classroom.id == classroom.id && e.time_slot.collides_with(slot))
    }

    /// Whether placing `course` in `slot` would overlap a placed graduate course.
    ///
    /// Always `false` for undergraduate courses. Classroom is irrelevant.
    pub fn has_graduate_conflict(&self, course: &Course, slot: &TimeSlot) -> bool {
        if !course.is_graduate {
            return false;
        }
        self.entries
            .iter()
            .any(|e| e.course.is_graduate && e.time_slot.collides_with(slot))
    }

    /// Whether the course's instructor is free during `slot`.
    pub fn is_instructor_available(&self, course: &Course, slot: &TimeSlot) -> bool {
        !self
            .entries
            .iter()
            .any(|e| e.course.instructor == course.instructor && e.time_slot.collides_with(slot))
    }

    /// Whether `course` can go into `classroom` during `slot`.
    ///
    /// Requires all four: room seats the class, room is free, no graduate
    /// overlap, instructor is free.
    pub fn can_place(&self, course: &Course, classroom: &Classroom, slot: &TimeSlot) -> bool {
        classroom.can_seat(course)
            && self.is_room_available(classroom, slot)
            && !self.has_graduate_conflict(course, slot)
            && self.is_instructor_available(course, slot)
    }
}
