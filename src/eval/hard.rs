//! Hard constraints H1–H7.
//!
//! Each function returns the raw violation count for one constraint; the
//! aggregator in [`super`] scales counts by the hard penalty. Entries
//! referencing ids unknown to the instance model are skipped, never an
//! error.

use std::collections::{HashMap, HashSet};

use crate::instance::Hospital;
use crate::solution::Solution;

/// H1: one violation per (day, room) housing more than one gender.
pub fn h1_no_gender_mix(solution: &Solution, hospital: &Hospital) -> u64 {
    let mut genders: HashMap<(usize, &str), HashSet<&str>> = HashMap::new();
    for slot in hospital.room_occupancies(solution) {
        genders
            .entry((slot.day, slot.room_id))
            .or_default()
            .insert(slot.gender);
    }
    genders.values().filter(|g| g.len() > 1).count() as u64
}

/// H2: one violation per patient placed in a room it is incompatible with.
pub fn h2_compatible_rooms(solution: &Solution, hospital: &Hospital) -> u64 {
    solution
        .patients
        .iter()
        .filter_map(|assignment| hospital.patient(&assignment.id).map(|p| (assignment, p)))
        .filter(|(assignment, patient)| {
            patient.incompatible_room_ids.contains(&assignment.room)
        })
        .count() as u64
}

/// H3: one violation per (day, surgeon) whose summed surgery minutes
/// exceed the surgeon's budget for that day.
pub fn h3_surgeon_overtime(solution: &Solution, hospital: &Hospital) -> u64 {
    let mut load: HashMap<(usize, &str), u64> = HashMap::new();
    for assignment in &solution.patients {
        if let Some(patient) = hospital.patient(&assignment.id) {
            *load
                .entry((assignment.admission_day, patient.surgeon_id.as_str()))
                .or_default() += u64::from(patient.surgery_duration);
        }
    }

    load.iter()
        .filter(|(&(day, surgeon_id), &minutes)| {
            hospital
                .surgeon(surgeon_id)
                .and_then(|surgeon| surgeon.max_surgery_time.get(day))
                .is_some_and(|&budget| minutes > u64::from(budget))
        })
        .count() as u64
}

/// H4: one violation per (day, operating theater) whose summed surgery
/// minutes exceed the theater's availability for that day.
pub fn h4_ot_overtime(solution: &Solution, hospital: &Hospital) -> u64 {
    let mut load: HashMap<(usize, &str), u64> = HashMap::new();
    for assignment in &solution.patients {
        if let Some(patient) = hospital.patient(&assignment.id) {
            *load
                .entry((assignment.admission_day, assignment.operating_theater.as_str()))
                .or_default() += u64::from(patient.surgery_duration);
        }
    }

    load.iter()
        .filter(|(&(day, theater_id), &minutes)| {
            hospital
                .operating_theater(theater_id)
                .and_then(|theater| theater.availability.get(day))
                .is_some_and(|&budget| minutes > u64::from(budget))
        })
        .count() as u64
}

/// H5: one violation per mandatory patient with no placement.
pub fn h5_mandatory_unscheduled(solution: &Solution, hospital: &Hospital) -> u64 {
    let scheduled = solution.scheduled_ids();
    hospital
        .patients
        .iter()
        .filter(|patient| patient.mandatory && !scheduled.contains(patient.id.as_str()))
        .count() as u64
}

/// H6: one violation per broken admission bound — before the release day,
/// or past the due day for mandatory patients. A single placement can
/// break both bounds.
pub fn h6_admission_day(solution: &Solution, hospital: &Hospital) -> u64 {
    let mut violations = 0;
    for assignment in &solution.patients {
        let Some(patient) = hospital.patient(&assignment.id) else {
            continue;
        };
        if assignment.admission_day < patient.surgery_release_day {
            violations += 1;
        }
        if patient.mandatory {
            if let Some(due) = patient.surgery_due_day {
                if assignment.admission_day > due {
                    violations += 1;
                }
            }
        }
    }
    violations
}

/// H7: one violation per (day, room) with more simultaneous occupants
/// than beds.
pub fn h7_room_capacity(solution: &Solution, hospital: &Hospital) -> u64 {
    let mut occupancy: HashMap<(usize, &str), usize> = HashMap::new();
    for slot in hospital.room_occupancies(solution) {
        *occupancy.entry((slot.day, slot.room_id)).or_default() += 1;
    }

    occupancy
        .iter()
        .filter(|(&(_, room_id), &count)| {
            hospital
                .room(room_id)
                .is_some_and(|room| count > room.capacity)
        })
        .count() as u64
}
