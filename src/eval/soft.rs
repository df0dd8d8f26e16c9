//! Soft constraints S1–S8.
//!
//! Each function returns its violation measure already scaled by the
//! instance-configured weight. A (day, shift, room) slot with no nurse
//! contributes nothing here except through S8/S5-style counting rules;
//! unstaffed slots are legal and scored elsewhere (or not at all).

use std::collections::{HashMap, HashSet};

use crate::instance::Hospital;
use crate::solution::Solution;

/// S1: per (day, room) with 2+ occupants, the spread between the highest
/// and lowest age-group rank.
pub fn s1_mixed_age(solution: &Solution, hospital: &Hospital, weight: u64) -> u64 {
    let mut ranks: HashMap<(usize, &str), Vec<usize>> = HashMap::new();
    for slot in hospital.room_occupancies(solution) {
        if let Some(rank) = hospital.age_rank(slot.age_group) {
            ranks.entry((slot.day, slot.room_id)).or_default().push(rank);
        }
    }

    let cost: u64 = ranks
        .values()
        .filter(|group| group.len() > 1)
        .map(|group| {
            let max = group.iter().max().copied().unwrap_or(0);
            let min = group.iter().min().copied().unwrap_or(0);
            (max - min) as u64
        })
        .sum();
    cost * weight
}

/// S2: per staffed (day, shift, room) occupancy, the shortfall between the
/// required skill level and the assigned nurse's skill.
pub fn s2_minimum_skill(solution: &Solution, hospital: &Hospital, weight: u64) -> u64 {
    let coverage = hospital.nurse_coverage(solution);
    let shift_count = hospital.shift_types.len();

    let mut cost = 0u64;
    for slot in hospital.room_occupancies(solution) {
        for (shift_idx, shift) in hospital.shift_types.iter().enumerate() {
            let required_idx = slot.day_offset * shift_count + shift_idx;
            let Some(&required) = slot.skill_level_required.get(required_idx) else {
                continue;
            };
            if let Some(nurse) = coverage.get(&(slot.day, shift.as_str(), slot.room_id)) {
                if nurse.skill_level < required {
                    cost += u64::from(required - nurse.skill_level);
                }
            }
        }
    }
    cost * weight
}

/// S3: per patient (scheduled or occupant), the number of distinct nurses
/// that ever staff one of their (day, shift, room) slots.
pub fn s3_continuity_of_care(solution: &Solution, hospital: &Hospital, weight: u64) -> u64 {
    let coverage = hospital.nurse_coverage(solution);

    let mut cost = 0u64;
    let mut count_stay = |admission_day: usize, length_of_stay: usize, room_id: &str| {
        let mut nurses: HashSet<&str> = HashSet::new();
        for offset in 0..length_of_stay {
            let day = admission_day + offset;
            for shift in &hospital.shift_types {
                if let Some(nurse) = coverage.get(&(day, shift.as_str(), room_id)) {
                    nurses.insert(&nurse.id);
                }
            }
        }
        cost += nurses.len() as u64;
    };

    for assignment in &solution.patients {
        if let Some(patient) = hospital.patient(&assignment.id) {
            count_stay(assignment.admission_day, patient.length_of_stay, &assignment.room);
        }
    }
    for occupant in &hospital.occupants {
        count_stay(0, occupant.length_of_stay, &occupant.room_id);
    }

    cost * weight
}

/// S4: per (nurse, day, shift), the workload from all patients in the
/// nurse's assigned rooms beyond the nurse's configured maximum.
pub fn s4_excessive_workload(solution: &Solution, hospital: &Hospital, weight: u64) -> u64 {
    let coverage = hospital.nurse_coverage(solution);
    let shift_count = hospital.shift_types.len();

    let mut load: HashMap<(&str, usize, usize), u64> = HashMap::new();
    for slot in hospital.room_occupancies(solution) {
        for (shift_idx, shift) in hospital.shift_types.iter().enumerate() {
            let Some(nurse) = coverage.get(&(slot.day, shift.as_str(), slot.room_id)) else {
                continue;
            };
            let workload_idx = slot.day_offset * shift_count + shift_idx;
            if let Some(&workload) = slot.workload_produced.get(workload_idx) {
                *load
                    .entry((nurse.id.as_str(), slot.day, shift_idx))
                    .or_default() += u64::from(workload);
            }
        }
    }

    let cost: u64 = load
        .iter()
        .map(|(&(nurse_id, day, shift_idx), &total)| {
            let max_load =
                u64::from(hospital.nurse_max_load(nurse_id, day, &hospital.shift_types[shift_idx]));
            total.saturating_sub(max_load)
        })
        .sum();
    cost * weight
}

/// S5: number of distinct (day, operating theater) pairs in use.
pub fn s5_open_ots(solution: &Solution, _hospital: &Hospital, weight: u64) -> u64 {
    let open: HashSet<(usize, &str)> = solution
        .patients
        .iter()
        .map(|p| (p.admission_day, p.operating_theater.as_str()))
        .collect();
    open.len() as u64 * weight
}

/// S6: per (day, surgeon) operating in more than one theater, the number
/// of extra theaters.
pub fn s6_surgeon_transfer(solution: &Solution, hospital: &Hospital, weight: u64) -> u64 {
    let mut theaters: HashMap<(usize, &str), HashSet<&str>> = HashMap::new();
    for assignment in &solution.patients {
        if let Some(patient) = hospital.patient(&assignment.id) {
            theaters
                .entry((assignment.admission_day, patient.surgeon_id.as_str()))
                .or_default()
                .insert(assignment.operating_theater.as_str());
        }
    }

    let cost: u64 = theaters
        .values()
        .filter(|used| used.len() > 1)
        .map(|used| (used.len() - 1) as u64)
        .sum();
    cost * weight
}

/// S7: per placement, days of delay past the release day.
pub fn s7_admission_delay(solution: &Solution, hospital: &Hospital, weight: u64) -> u64 {
    let cost: u64 = solution
        .patients
        .iter()
        .filter_map(|assignment| hospital.patient(&assignment.id).map(|p| (assignment, p)))
        .map(|(assignment, patient)| {
            assignment
                .admission_day
                .saturating_sub(patient.surgery_release_day) as u64
        })
        .sum();
    cost * weight
}

/// S8: number of optional patients left unscheduled.
pub fn s8_unscheduled_optional(solution: &Solution, hospital: &Hospital, weight: u64) -> u64 {
    let scheduled = solution.scheduled_ids();
    let count = hospital
        .patients
        .iter()
        .filter(|patient| !patient.mandatory && !scheduled.contains(patient.id.as_str()))
        .count() as u64;
    count * weight
}
