//! Conflict diagnosis for unplaced courses.
//!
//! Picks one best-guess reason per course. Checks are ordered and the
//! first match wins:
//!
//! 1. No classroom seats the course at all.
//! 2. Every preference overlaps a placed graduate course.
//! 3. Every preference overlaps another course of the same instructor.
//! 4. Catch-all.
//!
//! Diagnosis runs after the whole placement pass, against the final
//! committed state. A reason may therefore cite a course that was placed
//! after the diagnosed one.

use crate::models::{Classroom, ConflictReason, Course};

use super::Commitments;

/// Explains why `course` could not be placed.
pub fn diagnose(
    course: &Course,
    classrooms: &[Classroom],
    committed: &Commitments,
) -> ConflictReason {
    if !classrooms.iter().any(|room| room.can_seat(course)) {
        return ConflictReason::NoCapacity {
            required: course.required_capacity,
        };
    }

    let all_graduate_clashes = course
        .time_preferences
        .iter()
        .all(|pref| committed.has_graduate_conflict(course, pref));
    if all_graduate_clashes {
        return ConflictReason::GraduateClash;
    }

    let all_instructor_clashes = course
        .time_preferences
        .iter()
        .all(|pref| !committed.is_instructor_available(course, pref));
    if all_instructor_clashes {
        return ConflictReason::InstructorClash {
            instructor: course.instructor.clone(),
        };
    }

    ConflictReason::NoMatchingSlot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, ScheduleEntry, TimeSlot};

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(Day::Monday, start, end).unwrap()
    }

    fn rooms() -> Vec<Classroom> {
        vec![Classroom::new("r1", "Room 101", 50)]
    }

    fn placed(course: Course, s: TimeSlot) -> Commitments {
        let mut c = Commitments::new();
        c.commit(ScheduleEntry::new(course, Classroom::new("r9", "Hall", 300), s));
        c
    }

    #[test]
    fn test_capacity_wins_first() {
        let course = Course::new("c", "CS101")
            .graduate()
            .with_capacity(100)
            .with_preference(slot("08:00", "09:30"));
        let committed = placed(
            Course::new("g", "CS900").graduate().with_capacity(10),
            slot("08:00", "09:30"),
        );

        assert_eq!(
            diagnose(&course, &rooms(), &committed),
            ConflictReason::NoCapacity { required: 100 }
        );
    }

    #[test]
    fn test_graduate_clash_requires_all_preferences() {
        let grad = Course::new("g2", "CS902")
            .graduate()
            .with_instructor("B")
            .with_capacity(10)
            .with_preference(slot("08:00", "09:30"))
            .with_preference(slot("10:00", "11:00"));
        let committed = placed(
            Course::new("g1", "CS901").graduate().with_instructor("A"),
            slot("08:00", "09:30"),
        );

        // Second preference is clear of graduate courses
        assert_eq!(
            diagnose(&grad, &rooms(), &committed),
            ConflictReason::NoMatchingSlot
        );

        let single = Course {
            time_preferences: vec![slot("09:00", "09:45")],
            ..grad
        };
        assert_eq!(
            diagnose(&single, &rooms(), &committed),
            ConflictReason::GraduateClash
        );
    }

    #[test]
    fn test_instructor_clash() {
        let course = Course::new("c2", "CS102")
            .with_instructor("Dr. Smith")
            .with_capacity(10)
            .with_preference(slot("08:00", "09:30"));
        let committed = placed(
            Course::new("c1", "CS101").with_instructor("Dr. Smith"),
            slot("08:30", "10:00"),
        );

        assert_eq!(
            diagnose(&course, &rooms(), &committed),
            ConflictReason::InstructorClash {
                instructor: "Dr. Smith".into()
            }
        );
    }

    #[test]
    fn test_graduate_reason_beats_instructor_reason() {
        // Same instructor and both graduate: both rules match, rule 2 wins
        let course = Course::new("g2", "CS902")
            .graduate()
            .with_instructor("Dr. Smith")
            .with_capacity(10)
            .with_preference(slot("08:00", "09:30"));
        let committed = placed(
            Course::new("g1", "CS901").graduate().with_instructor("Dr. Smith"),
            slot("08:30", "10:00"),
        );

        assert!(!committed.is_instructor_available(&course, &course.time_preferences[0]));
        assert_eq!(
            diagnose(&course, &rooms(), &committed),
            ConflictReason::GraduateClash
        );
    }

    #[test]
    fn test_undergraduate_never_gets_graduate_reason() {
        let course = Course::new("u", "CS102")
            .with_instructor("B")
            .with_capacity(10)
            .with_preference(slot("08:00", "09:30"));
        let committed = placed(
            Course::new("g", "CS900").graduate().with_instructor("A"),
            slot("08:00", "09:30"),
        );

        assert_eq!(
            diagnose(&course, &rooms(), &committed),
            ConflictReason::NoMatchingSlot
        );
    }

    #[test]
    fn test_empty_preferences_fall_to_graduate_reason() {
        // `all` over no preferences holds vacuously
        let course = Course::new("u", "CS102").with_capacity(10);
        assert_eq!(
            diagnose(&course, &rooms(), &Commitments::new()),
            ConflictReason::GraduateClash
        );
    }
}
