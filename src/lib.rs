//! Course timetabling for the U-Engine ecosystem.
//!
//! Assigns course offerings to classroom/time-slot pairs under seat
//! capacity, instructor availability, and graduate exclusivity
//! constraints, and explains every course it cannot place.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Classroom`, `TimeSlot`,
//!   `ScheduleEntry`, `ConflictReport`, `ScheduleResult`
//! - **`validation`**: Input shape checks (course codes, capacities, durations)
//! - **`scheduler`**: Greedy first-fit `CourseScheduler`, conflict
//!   diagnosis, and `ScheduleKpi`
//! - **`timetable`**: Standard weekly blocks, candidate slot generation,
//!   and a day-by-block grid view
//!
//! # Usage
//!
//! Construct a `CourseScheduler`, call `validate_input()`, and only if it
//! returns no errors call `generate_schedule()`. Rebuild the scheduler
//! whenever inputs change; there is no incremental update.
//!
//! # Logging
//!
//! The scheduler emits `tracing` events (`debug` per course, `info` per
//! run). Install a subscriber in the host application to see them.

pub mod models;
pub mod scheduler;
pub mod timetable;
pub mod validation;
