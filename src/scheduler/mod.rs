//! Greedy course scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `CourseScheduler` makes one deterministic first-fit pass over the
//! courses in precedence order. It is not optimal and never backtracks;
//! every course it cannot place gets a single diagnosed reason.
//!
//! # Feasibility
//!
//! A course fits a (classroom, slot) pair when the room seats it, the
//! room is free, no graduate course overlaps (graduate courses only),
//! and its instructor is free. All checks consult [`Commitments`], the
//! entries placed so far in the current run.
//!
//! # KPI
//!
//! `ScheduleKpi` computes placement rate, preference satisfaction, and
//! per-classroom booked time.

mod commitments;
mod diagnosis;
mod engine;
mod kpi;
mod priority;

pub use commitments::Commitments;
pub use diagnosis::diagnose;
pub use engine::{CourseScheduler, ScheduleRequest, SchedulingError};
pub use kpi::ScheduleKpi;
pub use priority::{compare_priority, priority_order};
