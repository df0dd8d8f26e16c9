//! Mutable candidate solution.
//!
//! A [`Solution`] is the unit the search clones and mutates: patient
//! placements plus nurse duty rosters. It serializes directly in the
//! persisted solution format (`patients` + `nurses` arrays). A patient
//! with no entry in `patients` is unscheduled.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Placement of one scheduled patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientAssignment {
    /// Patient id.
    pub id: String,
    /// Day the stay begins.
    pub admission_day: usize,
    /// Room occupied for the whole stay.
    pub room: String,
    /// Operating theater used on the admission day.
    pub operating_theater: String,
}

/// One duty record of a nurse: the rooms covered in a (day, shift) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub day: usize,
    pub shift: String,
    pub rooms: Vec<String>,
}

/// All duty records of one nurse. At most one record per (day, shift).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NurseRoster {
    /// Nurse id.
    pub id: String,
    pub assignments: Vec<ShiftAssignment>,
}

/// A candidate schedule: patient placements and nurse duty rosters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub patients: Vec<PatientAssignment>,
    pub nurses: Vec<NurseRoster>,
}

impl Solution {
    /// Ids of all scheduled patients.
    pub fn scheduled_ids(&self) -> HashSet<&str> {
        self.patients.iter().map(|p| p.id.as_str()).collect()
    }

    /// The placement of a given patient, if scheduled.
    pub fn placement(&self, patient_id: &str) -> Option<&PatientAssignment> {
        self.patients.iter().find(|p| p.id == patient_id)
    }
}
