//! Greedy initial solution.
//!
//! Admits mandatory patients first (by ascending due day), then optional
//! patients (by ascending release day), taking for each the first
//! (day, room, theater) combination that keeps every admission hard
//! constraint clean. Nurse duty is then assigned greedily per occupied
//! (day, shift, room) slot. Patients with no feasible combination stay
//! unscheduled; for mandatory patients that is logged and later scored
//! as an H5 violation, never treated as fatal.

use std::collections::HashMap;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::warn;

use super::neighborhoods::admission_hard_ok;
use crate::instance::{Hospital, Patient};
use crate::solution::{NurseRoster, PatientAssignment, ShiftAssignment, Solution};

/// Builds the greedy starting solution for the search.
pub fn build_initial_solution<R: Rng>(hospital: &Hospital, rng: &mut R) -> Solution {
    let mut solution = Solution::default();

    let mut mandatory: Vec<&Patient> =
        hospital.patients.iter().filter(|p| p.mandatory).collect();
    mandatory.sort_by_key(|p| p.effective_due_day(hospital.days));
    let mut optional: Vec<&Patient> =
        hospital.patients.iter().filter(|p| !p.mandatory).collect();
    optional.sort_by_key(|p| p.surgery_release_day);

    for patient in mandatory.into_iter().chain(optional) {
        let release = patient.surgery_release_day;
        let due = patient.effective_due_day(hospital.days);
        if release > due {
            continue;
        }

        let mut rooms: Vec<&str> = hospital
            .rooms
            .iter()
            .map(|room| room.id.as_str())
            .filter(|id| !patient.incompatible_room_ids.iter().any(|r| r == id))
            .collect();
        let mut theaters: Vec<&str> = hospital
            .operating_theaters
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        rooms.shuffle(rng);
        theaters.shuffle(rng);

        let placed = try_admit(&mut solution, hospital, patient, release, due, &rooms, &theaters);
        if !placed && patient.mandatory {
            warn!(patient = %patient.id, "no feasible placement for mandatory patient");
        }
    }

    assign_nurses(&mut solution, hospital, rng);
    solution
}

/// Tries every (day, room, theater) combination in order, keeping the
/// first one that leaves the solution hard-clean.
fn try_admit(
    solution: &mut Solution,
    hospital: &Hospital,
    patient: &Patient,
    release: usize,
    due: usize,
    rooms: &[&str],
    theaters: &[&str],
) -> bool {
    for day in release..=due {
        for &room in rooms {
            for &theater in theaters {
                solution.patients.push(PatientAssignment {
                    id: patient.id.clone(),
                    admission_day: day,
                    room: room.to_string(),
                    operating_theater: theater.to_string(),
                });
                if admission_hard_ok(solution, hospital) {
                    return true;
                }
                solution.patients.pop();
            }
        }
    }
    false
}

/// Staffs every occupied (day, shift, room) slot with a uniformly chosen
/// nurse whose skill meets the slot's maximum requirement and who is
/// rostered for the window.
fn assign_nurses<R: Rng>(solution: &mut Solution, hospital: &Hospital, rng: &mut R) {
    let shift_count = hospital.shift_types.len();

    let mut required: HashMap<(usize, usize, String), u32> = HashMap::new();
    for slot in hospital.room_occupancies(solution) {
        for shift_idx in 0..shift_count {
            let idx = slot.day_offset * shift_count + shift_idx;
            if let Some(&level) = slot.skill_level_required.get(idx) {
                let entry = required
                    .entry((slot.day, shift_idx, slot.room_id.to_string()))
                    .or_insert(0);
                *entry = (*entry).max(level);
            }
        }
    }
    // Sorted order keeps nurse draws reproducible under a fixed seed.
    let mut slots: Vec<_> = required.into_iter().collect();
    slots.sort_by(|a, b| a.0.cmp(&b.0));

    let mut roster_index: HashMap<String, usize> = HashMap::new();
    for ((day, shift_idx, room_id), required_skill) in slots {
        let shift = &hospital.shift_types[shift_idx];
        let eligible: Vec<_> = hospital
            .nurses
            .iter()
            .filter(|nurse| {
                nurse.skill_level >= required_skill
                    && nurse
                        .working_shifts
                        .iter()
                        .any(|window| window.day == day && window.shift == *shift)
            })
            .collect();
        let Some(nurse) = eligible.choose(rng) else {
            continue;
        };

        let roster_at = *roster_index.entry(nurse.id.clone()).or_insert_with(|| {
            solution.nurses.push(NurseRoster {
                id: nurse.id.clone(),
                assignments: Vec::new(),
            });
            solution.nurses.len() - 1
        });
        let roster = &mut solution.nurses[roster_at];
        match roster
            .assignments
            .iter_mut()
            .find(|duty| duty.day == day && duty.shift == *shift)
        {
            Some(duty) => {
                if !duty.rooms.contains(&room_id) {
                    duty.rooms.push(room_id);
                }
            }
            None => roster.assignments.push(ShiftAssignment {
                day,
                shift: shift.clone(),
                rooms: vec![room_id],
            }),
        }
    }
}
