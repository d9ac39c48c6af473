//! Course model.
//!
//! A course is a single offering that needs one classroom for one weekly
//! time slot. Its `time_preferences` are a ranked list of acceptable
//! slots, tried in the order given.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A course offering to be placed in the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Caller-assigned unique identifier. Immutable after creation.
    pub id: String,
    /// Catalog code, e.g. `CS101` or `MATH3000`.
    pub code: String,
    /// Human-readable title.
    pub name: String,
    /// Instructor name. Compared by exact string equality.
    pub instructor: String,
    /// Graduate-level course (placed first, mutually exclusive in time).
    pub is_graduate: bool,
    /// Number of seats needed.
    pub required_capacity: u32,
    /// Session length in minutes. `None` = not provided.
    #[serde(default)]
    pub duration: Option<u32>,
    /// Acceptable slots, most preferred first.
    #[serde(default)]
    pub time_preferences: Vec<TimeSlot>,
}

impl Course {
    /// Creates an undergraduate course with the given ID and code.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: String::new(),
            instructor: String::new(),
            is_graduate: false,
            required_capacity: 0,
            duration: None,
            time_preferences: Vec::new(),
        }
    }

    /// Sets the course title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Marks the course as graduate-level.
    pub fn graduate(mut self) -> Self {
        self.is_graduate = true;
        self
    }

    /// Sets the number of seats needed.
    pub fn with_capacity(mut self, required_capacity: u32) -> Self {
        self.required_capacity = required_capacity;
        self
    }

    /// Sets the session length in minutes.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Appends a time preference (lower rank than those already added).
    pub fn with_preference(mut self, slot: TimeSlot) -> Self {
        self.time_preferences.push(slot);
        self
    }

    /// Whether any preferences were given.
    pub fn has_preferences(&self) -> bool {
        !self.time_preferences.is_empty()
    }

    /// Rank of `slot` among this course's preferences (0 = first choice).
    pub fn preference_rank(&self, slot: &TimeSlot) -> Option<usize> {
        self.time_preferences.iter().position(|p| p == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    #[test]
    fn test_course_builder() {
        let slot = TimeSlot::parse(Day::Monday, "08:00", "09:30").unwrap();
        let course = Course::new("course-1", "CS101")
            .with_name("Intro to CS")
            .with_instructor("Dr. Smith")
            .graduate()
            .with_capacity(30)
            .with_duration(90)
            .with_preference(slot);

        assert_eq!(course.id, "course-1");
        assert_eq!(course.code, "CS101");
        assert_eq!(course.name, "Intro to CS");
        assert_eq!(course.instructor, "Dr. Smith");
        assert!(course.is_graduate);
        assert_eq!(course.required_capacity, 30);
        assert_eq!(course.duration, Some(90));
        assert_eq!(course.preference_rank(&slot), Some(0));
    }

    #[test]
    fn test_preference_rank() {
        let a = TimeSlot::parse(Day::Monday, "08:00", "09:30").unwrap();
        let b = TimeSlot::parse(Day::Monday, "09:45", "11:15").unwrap();
        let c = TimeSlot::parse(Day::Friday, "09:45", "11:15").unwrap();
        let course = Course::new("c", "CS101").with_preference(a).with_preference(b);

        assert_eq!(course.preference_rank(&b), Some(1));
        assert_eq!(course.preference_rank(&c), None);
    }

    #[test]
    fn test_course_deserialize_camel_case() {
        let json = r#"{
            "id": "course-1",
            "code": "MATH3000",
            "name": "Topology",
            "instructor": "Dr. Noether",
            "isGraduate": true,
            "requiredCapacity": 25,
            "duration": 90,
            "timePreferences": [
                {"day": "Tuesday", "startTime": "09:45", "endTime": "11:15"}
            ]
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.is_graduate);
        assert_eq!(course.required_capacity, 25);
        assert_eq!(course.time_preferences[0].day, Day::Tuesday);
    }

    #[test]
    fn test_course_missing_duration_is_none() {
        let json = r#"{
            "id": "c", "code": "CS101", "name": "n", "instructor": "i",
            "isGraduate": false, "requiredCapacity": 10
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.duration, None);
        assert!(!course.has_preferences());
    }
}
