//! Greedy first-fit course scheduler.
//!
//! # Algorithm
//!
//! 1. Order courses by precedence (graduate first, then larger classes).
//! 2. For each course, walk its preferences in order, and for each
//!    preference walk classrooms in input order.
//! 3. Commit the first (preference, classroom) pair that passes every
//!    feasibility check.
//! 4. Courses with no such pair are diagnosed after the pass.
//! 5. Sort committed entries by start time (stable).
//!
//! One forward pass: placed courses are never moved to make room for
//! later ones.
//!
//! # Complexity
//! O(n * p * r * n) where n=courses, p=preferences/course, r=classrooms;
//! each feasibility check scans the committed entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Classroom, ConflictReport, Course, ScheduleEntry, ScheduleResult};
use crate::validation::{validate_input, ValidationError, ValidationResult};

use super::{diagnose, priority_order, Commitments};

/// Errors returned by [`CourseScheduler::try_generate_schedule`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulingError {
    /// Input failed validation; nothing was scheduled.
    #[error("input failed validation with {} error(s)", .0.len())]
    InvalidInput(Vec<ValidationError>),
}

/// Input container for scheduling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Courses to place.
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Available classrooms, in the order they should be tried.
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(courses: Vec<Course>, classrooms: Vec<Classroom>) -> Self {
        Self {
            courses,
            classrooms,
        }
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Adds a classroom.
    pub fn with_classroom(mut self, classroom: Classroom) -> Self {
        self.classrooms.push(classroom);
        self
    }
}

/// Greedy first-fit course scheduler.
///
/// Owns copies of its courses and classrooms taken at construction.
/// Every call to [`generate_schedule`](Self::generate_schedule) starts
/// from an empty schedule, so repeated calls return identical results.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Classroom, Course, Day, TimeSlot};
/// use u_timetable::scheduler::CourseScheduler;
///
/// let courses = vec![
///     Course::new("course-1", "CS101")
///         .with_name("Intro to CS")
///         .with_instructor("Dr. Smith")
///         .with_capacity(30)
///         .with_duration(90)
///         .with_preference(TimeSlot::parse(Day::Monday, "08:00", "09:30").unwrap()),
/// ];
/// let classrooms = vec![Classroom::new("room-1", "Room 101", 40)];
///
/// let scheduler = CourseScheduler::new(courses, classrooms);
/// assert!(scheduler.validate_input().is_empty());
///
/// let result = scheduler.generate_schedule();
/// assert_eq!(result.schedule.len(), 1);
/// assert!(result.conflicts.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CourseScheduler {
    courses: Vec<Course>,
    classrooms: Vec<Classroom>,
}

impl CourseScheduler {
    /// Creates a scheduler over the given courses and classrooms.
    pub fn new(courses: Vec<Course>, classrooms: Vec<Classroom>) -> Self {
        Self {
            courses,
            classrooms,
        }
    }

    /// Creates a scheduler from a request.
    pub fn from_request(request: ScheduleRequest) -> Self {
        Self::new(request.courses, request.classrooms)
    }

    /// Courses, in input order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Classrooms, in input order.
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// Checks the input and returns typed errors.
    pub fn validate(&self) -> ValidationResult {
        validate_input(&self.courses, &self.classrooms)
    }

    /// Checks the input and returns one message per problem.
    ///
    /// An empty list means the input may be scheduled. Callers must not
    /// call [`generate_schedule`](Self::generate_schedule) otherwise.
    pub fn validate_input(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors.into_iter().map(|e| e.message).collect(),
        }
    }

    /// Places every course it can and diagnoses the rest.
    ///
    /// Output is unspecified for input that fails validation.
    pub fn generate_schedule(&self) -> ScheduleResult {
        let mut committed = Commitments::new();
        let mut unplaced: Vec<&Course> = Vec::new();

        for idx in priority_order(&self.courses) {
            let course = &self.courses[idx];
            match self.find_placement(course, &committed) {
                Some(entry) => {
                    debug!(
                        course = %course.code,
                        classroom = %entry.classroom.name,
                        slot = %entry.time_slot,
                        "placed course"
                    );
                    committed.commit(entry);
                }
                None => unplaced.push(course),
            }
        }

        // Diagnose against the final state, after every placement
        let conflicts: Vec<ConflictReport> = unplaced
            .into_iter()
            .map(|course| {
                let reason = diagnose(course, &self.classrooms, &committed);
                debug!(course = %course.code, %reason, "course not placed");
                ConflictReport::new(course.clone(), reason)
            })
            .collect();

        let mut schedule = committed.into_entries();
        schedule.sort_by_key(|e| e.time_slot.start_time);

        info!(
            courses = self.courses.len(),
            classrooms = self.classrooms.len(),
            scheduled = schedule.len(),
            conflicts = conflicts.len(),
            "schedule generated"
        );

        ScheduleResult {
            schedule,
            conflicts,
        }
    }

    /// Validates, then schedules only if the input is acceptable.
    pub fn try_generate_schedule(&self) -> Result<ScheduleResult, SchedulingError> {
        self.validate().map_err(SchedulingError::InvalidInput)?;
        Ok(self.generate_schedule())
    }

    /// First feasible (preference, classroom) pair for `course`.
    fn find_placement(&self, course: &Course, committed: &Commitments) -> Option<ScheduleEntry> {
        course.time_preferences.iter().find_map(|pref| {
            self.classrooms
                .iter()
                .find(|room| committed.can_place(course, room, pref))
                .map(|room| ScheduleEntry::new(course.clone(), room.clone(), *pref))
        })
    }
}
