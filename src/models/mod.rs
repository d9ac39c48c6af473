//! Timetabling domain models.
//!
//! Provides the data types exchanged with the scheduling engine: the
//! input records supplied by callers and the result records it produces.
//!
//! # Domain Mappings
//!
//! | u-timetable | Job-shop scheduling |
//! |-------------|---------------------|
//! | Course | Task |
//! | Classroom | Resource |
//! | TimeSlot | Time window |
//! | ScheduleEntry | Assignment |
//! | ConflictReport | Violation |

mod classroom;
mod course;
mod schedule;
mod time;

pub use classroom::Classroom;
pub use course::Course;
pub use schedule::{
    ConflictKind, ConflictReason, ConflictReport, ScheduleEntry, ScheduleResult,
    UnknownConflictReason,
};
pub use time::{ClockTime, Day, TimeError, TimeSlot, TimeWindow};
