//! Input validation for timetabling problems.
//!
//! Checks the shape of courses and classrooms before scheduling. Every
//! check runs on every record so that all problems are reported in one
//! pass. Detects:
//! - Malformed course codes
//! - Courses without time preferences
//! - Non-positive seat requirements or durations
//! - Classrooms without seats
//!
//! Cross-entity feasibility (e.g. whether any room fits a course) is not
//! checked here; the scheduler reports it as a conflict.

use crate::models::{Classroom, Course};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Two to four uppercase letters followed by three or four ASCII digits.
static COURSE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,4}[0-9]{3,4}$").expect("course code pattern is valid"));

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Course code does not match the catalog pattern.
    InvalidCourseCode,
    /// Course lists no time preferences.
    MissingPreferences,
    /// Course requires zero seats.
    InvalidCapacityRequirement,
    /// Course duration missing or zero.
    InvalidDuration,
    /// Classroom has zero seats.
    InvalidClassroomCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Whether `code` is a well-formed course code (e.g. `CS101`, `MATH3000`).
pub fn is_valid_course_code(code: &str) -> bool {
    COURSE_CODE.is_match(code)
}

/// Validates the input data for a timetabling problem.
///
/// Checks, per course in input order:
/// 1. Code matches `^[A-Z]{2,4}[0-9]{3,4}$`
/// 2. At least one time preference
/// 3. Required capacity > 0
/// 4. Duration present and > 0
///
/// Then, per classroom in input order:
/// 5. Capacity > 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(courses: &[Course], classrooms: &[Classroom]) -> ValidationResult {
    let mut errors = Vec::new();

    for course in courses {
        if !is_valid_course_code(&course.code) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCourseCode,
                format!("Invalid course code format for {}", course.name),
            ));
        }

        if !course.has_preferences() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPreferences,
                format!("No time preferences specified for {}", course.code),
            ));
        }

        if course.required_capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacityRequirement,
                format!("Invalid capacity requirement for {}", course.code),
            ));
        }

        if !matches!(course.duration, Some(d) if d > 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Invalid duration for {}", course.code),
            ));
        }
    }

    for classroom in classrooms {
        if classroom.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidClassroomCapacity,
                format!("Invalid capacity for classroom {}", classroom.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
