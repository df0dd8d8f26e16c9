//! Indexed read-only view of a problem instance.
//!
//! Built once from [`InstanceData`], never mutated during search. Entity
//! vectors keep file order (so randomized candidate orders are drawn from
//! a deterministic base); id lookups go through `HashMap` indices and
//! return `Option` — a nonexistent id is "not found", never a panic.

use std::collections::HashMap;

use super::types::{
    InstanceData, Nurse, Occupant, OperatingTheater, Patient, Room, Surgeon, Weights,
};
use crate::solution::Solution;

/// One (day, room, person) cell of the occupancy expansion.
///
/// Covers both scheduled patients and pre-admitted occupants; `day_offset`
/// indexes the person's workload/skill vectors together with a shift index.
#[derive(Debug, Clone, Copy)]
pub struct StaySlot<'a> {
    pub day: usize,
    pub room_id: &'a str,
    pub person_id: &'a str,
    /// Days since admission (occupants are admitted at day 0).
    pub day_offset: usize,
    pub gender: &'a str,
    pub age_group: &'a str,
    pub workload_produced: &'a [u32],
    pub skill_level_required: &'a [u32],
}

/// The indexed instance model.
#[derive(Debug, Clone)]
pub struct Hospital {
    /// Planning horizon in days.
    pub days: usize,
    /// Totally ordered skill scale.
    pub skill_levels: Vec<u32>,
    /// Ordered shift names.
    pub shift_types: Vec<String>,
    /// Ordered age-group labels.
    pub age_groups: Vec<String>,
    /// Soft-constraint weights.
    pub weights: Weights,
    pub patients: Vec<Patient>,
    pub occupants: Vec<Occupant>,
    pub rooms: Vec<Room>,
    pub surgeons: Vec<Surgeon>,
    pub operating_theaters: Vec<OperatingTheater>,
    pub nurses: Vec<Nurse>,
    patient_index: HashMap<String, usize>,
    occupant_index: HashMap<String, usize>,
    room_index: HashMap<String, usize>,
    surgeon_index: HashMap<String, usize>,
    theater_index: HashMap<String, usize>,
    nurse_index: HashMap<String, usize>,
    age_rank: HashMap<String, usize>,
}

fn index_of<T>(items: &[T], id_of: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (id_of(item).to_string(), i))
        .collect()
}

impl Hospital {
    /// Builds the indexed view from parsed instance data.
    pub fn new(data: InstanceData) -> Self {
        let patient_index = index_of(&data.patients, |p| &p.id);
        let occupant_index = index_of(&data.occupants, |o| &o.id);
        let room_index = index_of(&data.rooms, |r| &r.id);
        let surgeon_index = index_of(&data.surgeons, |s| &s.id);
        let theater_index = index_of(&data.operating_theaters, |t| &t.id);
        let nurse_index = index_of(&data.nurses, |n| &n.id);
        let age_rank = data
            .age_groups
            .iter()
            .enumerate()
            .map(|(rank, group)| (group.clone(), rank))
            .collect();

        Self {
            days: data.days,
            skill_levels: data.skill_levels,
            shift_types: data.shift_types,
            age_groups: data.age_groups,
            weights: data.weights,
            patients: data.patients,
            occupants: data.occupants,
            rooms: data.rooms,
            surgeons: data.surgeons,
            operating_theaters: data.operating_theaters,
            nurses: data.nurses,
            patient_index,
            occupant_index,
            room_index,
            surgeon_index,
            theater_index,
            nurse_index,
            age_rank,
        }
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patient_index.get(id).map(|&i| &self.patients[i])
    }

    pub fn occupant(&self, id: &str) -> Option<&Occupant> {
        self.occupant_index.get(id).map(|&i| &self.occupants[i])
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    pub fn surgeon(&self, id: &str) -> Option<&Surgeon> {
        self.surgeon_index.get(id).map(|&i| &self.surgeons[i])
    }

    pub fn operating_theater(&self, id: &str) -> Option<&OperatingTheater> {
        self.theater_index.get(id).map(|&i| &self.operating_theaters[i])
    }

    pub fn nurse(&self, id: &str) -> Option<&Nurse> {
        self.nurse_index.get(id).map(|&i| &self.nurses[i])
    }

    /// Rank of an age group in the instance's ordered scale.
    pub fn age_rank(&self, age_group: &str) -> Option<usize> {
        self.age_rank.get(age_group).copied()
    }

    /// Position of a shift name in the ordered shift list.
    pub fn shift_index(&self, shift: &str) -> Option<usize> {
        self.shift_types.iter().position(|s| s == shift)
    }

    /// Expands a solution into (day, room, person) occupancy cells.
    ///
    /// Scheduled patients contribute `length_of_stay` consecutive days from
    /// their admission day, occupants from day 0; both are clipped to the
    /// horizon. Placements whose patient id is unknown are skipped.
    pub fn room_occupancies<'a>(
        &'a self,
        solution: &'a Solution,
    ) -> impl Iterator<Item = StaySlot<'a>> + 'a {
        let scheduled = solution
            .patients
            .iter()
            .filter_map(move |assignment| {
                self.patient(&assignment.id)
                    .map(|patient| (assignment, patient))
            })
            .flat_map(move |(assignment, patient)| {
                (0..patient.length_of_stay)
                    .map(move |offset| (assignment.admission_day + offset, offset))
                    .take_while(move |&(day, _)| day < self.days)
                    .map(move |(day, offset)| StaySlot {
                        day,
                        room_id: &assignment.room,
                        person_id: &patient.id,
                        day_offset: offset,
                        gender: &patient.gender,
                        age_group: &patient.age_group,
                        workload_produced: &patient.workload_produced,
                        skill_level_required: &patient.skill_level_required,
                    })
            });

        let resident = self.occupants.iter().flat_map(move |occupant| {
            (0..occupant.length_of_stay)
                .take_while(move |&day| day < self.days)
                .map(move |day| StaySlot {
                    day,
                    room_id: &occupant.room_id,
                    person_id: &occupant.id,
                    day_offset: day,
                    gender: &occupant.gender,
                    age_group: &occupant.age_group,
                    workload_produced: &occupant.workload_produced,
                    skill_level_required: &occupant.skill_level_required,
                })
        });

        scheduled.chain(resident)
    }

    /// Maps every staffed (day, shift, room) slot to its nurse.
    ///
    /// Built from the solution's rosters; a key that is absent means the
    /// slot is unstaffed. Rosters naming an unknown nurse are skipped.
    pub fn nurse_coverage<'a>(
        &'a self,
        solution: &'a Solution,
    ) -> HashMap<(usize, &'a str, &'a str), &'a Nurse> {
        let mut coverage = HashMap::new();
        for roster in &solution.nurses {
            let Some(nurse) = self.nurse(&roster.id) else {
                continue;
            };
            for duty in &roster.assignments {
                for room_id in &duty.rooms {
                    coverage.insert((duty.day, duty.shift.as_str(), room_id.as_str()), nurse);
                }
            }
        }
        coverage
    }

    /// Configured maximum workload of a nurse in a (day, shift) window.
    ///
    /// Returns 0 when the nurse is unknown or not rostered for the window.
    pub fn nurse_max_load(&self, nurse_id: &str, day: usize, shift: &str) -> u32 {
        self.nurse(nurse_id)
            .and_then(|nurse| {
                nurse
                    .working_shifts
                    .iter()
                    .find(|window| window.day == day && window.shift == shift)
            })
            .map(|window| window.max_load)
            .unwrap_or(0)
    }
}
