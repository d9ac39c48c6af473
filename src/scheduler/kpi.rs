//! Schedule quality metrics (KPIs).
//!
//! Summarises a finished run for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | Scheduled courses / all courses |
//! | First-Choice Rate | Entries in their first preference / ranked entries |
//! | Avg Preference Rank | Mean 0-based rank of the slot each entry got |
//!
//! An entry is ranked when its slot is one of its course's preferences.
//! Entries the scheduler produced always are; hand-built entries may not
//! be, and are left out of both rank metrics.
//! | Booked Minutes | Per-classroom sum of occupied minutes over the week |
//! | Conflicts by Kind | Count of unplaced courses per reason category |

use std::collections::{BTreeMap, HashMap};

use crate::models::{ConflictKind, ScheduleResult};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Courses that went through the run.
    pub total_courses: usize,
    /// Courses placed.
    pub scheduled_count: usize,
    /// Courses left unplaced.
    pub conflict_count: usize,
    /// Fraction of courses placed (0.0..1.0). 1.0 for an empty run.
    pub placement_rate: f64,
    /// Fraction of ranked entries that got their first preference.
    pub first_choice_rate: f64,
    /// Mean preference rank of ranked entries (0.0 = all first choices).
    pub avg_preference_rank: f64,
    /// Booked minutes per classroom ID.
    pub booked_minutes_by_classroom: HashMap<String, u32>,
    /// Unplaced courses per reason category.
    pub conflicts_by_kind: BTreeMap<ConflictKind, usize>,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduling result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let scheduled_count = result.schedule.len();
        let conflict_count = result.conflicts.len();
        let total_courses = scheduled_count + conflict_count;

        let mut ranked: usize = 0;
        let mut first_choice: usize = 0;
        let mut rank_sum: usize = 0;
        let mut booked: HashMap<String, u32> = HashMap::new();

        for entry in &result.schedule {
            if let Some(rank) = entry.course.preference_rank(&entry.time_slot) {
                ranked += 1;
                if rank == 0 {
                    first_choice += 1;
                }
                rank_sum += rank;
            }

            *booked.entry(entry.classroom.id.clone()).or_insert(0) +=
                u32::from(entry.time_slot.duration_minutes());
        }

        let conflicts_by_kind = result
            .conflicts_by_kind()
            .into_iter()
            .map(|(kind, group)| (kind, group.len()))
            .collect();

        let placement_rate = if total_courses == 0 {
            1.0
        } else {
            scheduled_count as f64 / total_courses as f64
        };

        let (first_choice_rate, avg_preference_rank) = if ranked == 0 {
            (0.0, 0.0)
        } else {
            (
                first_choice as f64 / ranked as f64,
                rank_sum as f64 / ranked as f64,
            )
        };

        Self {
            total_courses,
            scheduled_count,
            conflict_count,
            placement_rate,
            first_choice_rate,
            avg_preference_rank,
            booked_minutes_by_classroom: booked,
            conflicts_by_kind,
        }
    }

    /// Fraction of `available_minutes` a classroom is booked.
    ///
    /// Returns `None` if `available_minutes` is zero.
    pub fn classroom_utilization(&self, classroom_id: &str, available_minutes: u32) -> Option<f64> {
        if available_minutes == 0 {
            return None;
        }
        let booked = self
            .booked_minutes_by_classroom
            .get(classroom_id)
            .copied()
            .unwrap_or(0);
        Some(f64::from(booked) / f64::from(available_minutes))
    }

    /// Whether the run placed at least `min_placement_rate` of its courses.
    pub fn meets_threshold(&self, min_placement_rate: f64) -> bool {
        self.placement_rate >= min_placement_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Classroom, ConflictReason, ConflictReport, Course, Day, ScheduleEntry, TimeSlot,
    };

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(Day::Monday, start, end).unwrap()
    }

    fn sample_result() -> ScheduleResult {
        let early = slot("08:00", "09:30");
        let late = slot("09:45", "11:15");
        let room = Classroom::new("room-1", "Room 101", 40);
        let lab = Classroom::new("room-2", "Lab", 40);

        ScheduleResult {
            schedule: vec![
                ScheduleEntry::new(
                    Course::new("c1", "CS101").with_preference(early),
                    room.clone(),
                    early,
                ),
                ScheduleEntry::new(
                    Course::new("c2", "CS102")
                        .with_preference(early)
                        .with_preference(late),
                    room,
                    late,
                ),
                ScheduleEntry::new(Course::new("c3", "CS103").with_preference(early), lab, early),
            ],
            conflicts: vec![ConflictReport::new(
                Course::new("c4", "CS104"),
                ConflictReason::NoCapacity { required: 90 },
            )],
        }
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = ScheduleKpi::calculate(&sample_result());

        assert_eq!(kpi.total_courses, 4);
        assert_eq!(kpi.scheduled_count, 3);
        assert_eq!(kpi.conflict_count, 1);
        assert!((kpi.placement_rate - 0.75).abs() < 1e-10);
        assert!((kpi.first_choice_rate - 2.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_preference_rank - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.conflicts_by_kind[&ConflictKind::Capacity], 1);
    }

    #[test]
    fn test_booked_minutes() {
        let kpi = ScheduleKpi::calculate(&sample_result());
        assert_eq!(kpi.booked_minutes_by_classroom["room-1"], 180);
        assert_eq!(kpi.booked_minutes_by_classroom["room-2"], 90);

        let util = kpi.classroom_utilization("room-1", 360).unwrap();
        assert!((util - 0.5).abs() < 1e-10);
        assert_eq!(kpi.classroom_utilization("room-9", 360), Some(0.0));
        assert_eq!(kpi.classroom_utilization("room-1", 0), None);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&ScheduleResult::default());
        assert_eq!(kpi.total_courses, 0);
        assert!((kpi.placement_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.first_choice_rate, 0.0);
        assert!(kpi.conflicts_by_kind.is_empty());
    }

    #[test]
    fn test_unranked_entry_left_out_of_rank_metrics() {
        let mut result = sample_result();
        // Slot outside the course's preferences
        result.schedule.push(ScheduleEntry::new(
            Course::new("c5", "CS105").with_preference(slot("13:15", "14:45")),
            Classroom::new("room-3", "Annex", 40),
            slot("15:00", "16:30"),
        ));

        let kpi = ScheduleKpi::calculate(&result);
        assert_eq!(kpi.scheduled_count, 4);
        assert!((kpi.first_choice_rate - 2.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_preference_rank - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.booked_minutes_by_classroom["room-3"], 90);
    }

    #[test]
    fn test_only_unranked_entries() {
        let result = ScheduleResult {
            schedule: vec![ScheduleEntry::new(
                Course::new("c1", "CS101"),
                Classroom::new("room-1", "Room 101", 40),
                slot("08:00", "09:30"),
            )],
            conflicts: Vec::new(),
        };

        let kpi = ScheduleKpi::calculate(&result);
        assert_eq!(kpi.first_choice_rate, 0.0);
        assert_eq!(kpi.avg_preference_rank, 0.0);
    }

    #[test]
    fn test_meets_threshold() {
        let kpi = ScheduleKpi::calculate(&sample_result());
        assert!(kpi.meets_threshold(0.7));
        assert!(!kpi.meets_threshold(0.8));
    }
}
