//! Classroom model.

use serde::{Deserialize, Serialize};

use super::Course;

/// A room that can host one course per time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    /// Caller-assigned unique identifier.
    pub id: String,
    /// Human-readable name, e.g. `Room 101`.
    pub name: String,
    /// Seats available.
    pub capacity: u32,
    /// Projector installed. Informational; no constraint reads it.
    #[serde(default)]
    pub has_projector: bool,
}

impl Classroom {
    /// Creates a classroom without a projector.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            has_projector: false,
        }
    }

    /// Marks the classroom as having a projector.
    pub fn with_projector(mut self) -> Self {
        self.has_projector = true;
        self
    }

    /// Whether the room seats at least `course.required_capacity`.
    #[inline]
    pub fn can_seat(&self, course: &Course) -> bool {
        self.capacity >= course.required_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_seat_is_inclusive() {
        let room = Classroom::new("room-1", "Room 101", 40);
        assert!(room.can_seat(&Course::new("a", "CS101").with_capacity(40)));
        assert!(room.can_seat(&Course::new("b", "CS102").with_capacity(12)));
        assert!(!room.can_seat(&Course::new("c", "CS103").with_capacity(41)));
    }

    #[test]
    fn test_projector_defaults_off() {
        let room: Classroom =
            serde_json::from_str(r#"{"id":"r","name":"Lab","capacity":20}"#).unwrap();
        assert!(!room.has_projector);
        assert!(Classroom::new("r", "Lab", 20).with_projector().has_projector);
    }
}
