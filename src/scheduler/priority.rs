//! Placement precedence.
//!
//! Graduate courses go before undergraduate courses; within a tier,
//! larger classes go first. Both have fewer viable room/time
//! combinations, so placing them early leaves the flexible courses to
//! fill the gaps. Remaining ties keep input order.

use std::cmp::Ordering;

use crate::models::Course;

/// Compares two courses by placement precedence (`Less` = placed first).
pub fn compare_priority(a: &Course, b: &Course) -> Ordering {
    b.is_graduate
        .cmp(&a.is_graduate)
        .then_with(|| b.required_capacity.cmp(&a.required_capacity))
}

/// Returns course indices in placement order.
///
/// Stable: courses with equal precedence keep their relative input order.
pub fn priority_order(courses: &[Course]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..courses.len()).collect();
    indices.sort_by(|&a, &b| compare_priority(&courses[a], &courses[b]));
    indices
}
