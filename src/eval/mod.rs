//! Constraint evaluation.
//!
//! One pure scoring function per named constraint (`hard` for H1–H7,
//! `soft` for S1–S8) plus the total-cost aggregator. Hard violations are
//! scaled by [`HARD_VIOLATION_PENALTY`] so any solution with a hard
//! violation dominates any solution with fewer; soft costs are scaled by
//! the per-instance weights. All arithmetic is exact `u64`.

pub mod hard;
pub mod soft;

use crate::instance::Hospital;
use crate::solution::Solution;

/// Cost of a single hard-constraint violation.
pub const HARD_VIOLATION_PENALTY: u64 = 1_000_000;

/// Per-constraint cost breakdown of one evaluation.
///
/// Hard fields are already scaled by the penalty, soft fields by their
/// configured weights; [`CostBreakdown::total`] is the sum of all fifteen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostBreakdown {
    pub h1_no_gender_mix: u64,
    pub h2_compatible_rooms: u64,
    pub h3_surgeon_overtime: u64,
    pub h4_ot_overtime: u64,
    pub h5_mandatory_unscheduled: u64,
    pub h6_admission_day: u64,
    pub h7_room_capacity: u64,
    pub s1_mixed_age: u64,
    pub s2_minimum_skill: u64,
    pub s3_continuity_of_care: u64,
    pub s4_excessive_workload: u64,
    pub s5_open_ots: u64,
    pub s6_surgeon_transfer: u64,
    pub s7_admission_delay: u64,
    pub s8_unscheduled_optional: u64,
}

impl CostBreakdown {
    /// Grand total over all constraints.
    pub fn total(&self) -> u64 {
        self.hard_total() + self.soft_total()
    }

    /// Summed hard-constraint cost (always a multiple of the penalty).
    pub fn hard_total(&self) -> u64 {
        self.h1_no_gender_mix
            + self.h2_compatible_rooms
            + self.h3_surgeon_overtime
            + self.h4_ot_overtime
            + self.h5_mandatory_unscheduled
            + self.h6_admission_day
            + self.h7_room_capacity
    }

    /// Summed weighted soft-constraint cost.
    pub fn soft_total(&self) -> u64 {
        self.s1_mixed_age
            + self.s2_minimum_skill
            + self.s3_continuity_of_care
            + self.s4_excessive_workload
            + self.s5_open_ots
            + self.s6_surgeon_transfer
            + self.s7_admission_delay
            + self.s8_unscheduled_optional
    }

    /// Labeled entries in reporting order.
    pub fn entries(&self) -> [(&'static str, u64); 15] {
        [
            ("H1", self.h1_no_gender_mix),
            ("H2", self.h2_compatible_rooms),
            ("H3", self.h3_surgeon_overtime),
            ("H4", self.h4_ot_overtime),
            ("H5", self.h5_mandatory_unscheduled),
            ("H6", self.h6_admission_day),
            ("H7", self.h7_room_capacity),
            ("S1", self.s1_mixed_age),
            ("S2", self.s2_minimum_skill),
            ("S3", self.s3_continuity_of_care),
            ("S4", self.s4_excessive_workload),
            ("S5", self.s5_open_ots),
            ("S6", self.s6_surgeon_transfer),
            ("S7", self.s7_admission_delay),
            ("S8", self.s8_unscheduled_optional),
        ]
    }
}

/// Scores a solution against every constraint.
///
/// Pure: the same (solution, instance) pair always yields the same
/// breakdown, and evaluation never mutates the solution.
pub fn evaluate(solution: &Solution, hospital: &Hospital) -> (u64, CostBreakdown) {
    let weights = &hospital.weights;
    let breakdown = CostBreakdown {
        h1_no_gender_mix: hard::h1_no_gender_mix(solution, hospital) * HARD_VIOLATION_PENALTY,
        h2_compatible_rooms: hard::h2_compatible_rooms(solution, hospital)
            * HARD_VIOLATION_PENALTY,
        h3_surgeon_overtime: hard::h3_surgeon_overtime(solution, hospital)
            * HARD_VIOLATION_PENALTY,
        h4_ot_overtime: hard::h4_ot_overtime(solution, hospital) * HARD_VIOLATION_PENALTY,
        h5_mandatory_unscheduled: hard::h5_mandatory_unscheduled(solution, hospital)
            * HARD_VIOLATION_PENALTY,
        h6_admission_day: hard::h6_admission_day(solution, hospital) * HARD_VIOLATION_PENALTY,
        h7_room_capacity: hard::h7_room_capacity(solution, hospital) * HARD_VIOLATION_PENALTY,
        s1_mixed_age: soft::s1_mixed_age(solution, hospital, weights.room_mixed_age),
        s2_minimum_skill: soft::s2_minimum_skill(solution, hospital, weights.room_nurse_skill),
        s3_continuity_of_care: soft::s3_continuity_of_care(
            solution,
            hospital,
            weights.continuity_of_care,
        ),
        s4_excessive_workload: soft::s4_excessive_workload(
            solution,
            hospital,
            weights.nurse_eccessive_workload,
        ),
        s5_open_ots: soft::s5_open_ots(solution, hospital, weights.open_operating_theater),
        s6_surgeon_transfer: soft::s6_surgeon_transfer(
            solution,
            hospital,
            weights.surgeon_transfer,
        ),
        s7_admission_delay: soft::s7_admission_delay(solution, hospital, weights.patient_delay),
        s8_unscheduled_optional: soft::s8_unscheduled_optional(
            solution,
            hospital,
            weights.unscheduled_optional,
        ),
    };
    (breakdown.total(), breakdown)
}
