//! Persisted instance format.
//!
//! Mirrors the instance JSON: planning scalars, soft-constraint weights,
//! and the entity arrays (patients, occupants, rooms, surgeons, operating
//! theaters, nurses). These types are immutable reference data for the
//! lifetime of a run; the search never mutates them.

use serde::{Deserialize, Serialize};

/// A patient awaiting admission within the planning horizon.
///
/// Workload and skill requirements are flat per-(day-offset × shift)
/// vectors: index `day_offset * shift_count + shift_index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Unique patient identifier.
    pub id: String,
    /// Whether the patient must be admitted within the horizon.
    pub mandatory: bool,
    /// Gender label (rooms may not mix genders).
    pub gender: String,
    /// Age group label, ranked by the instance's `age_groups` order.
    pub age_group: String,
    /// Stay length in consecutive days from the admission day.
    pub length_of_stay: usize,
    /// Earliest admissible surgery day.
    pub surgery_release_day: usize,
    /// Latest admissible surgery day; present for mandatory patients only.
    #[serde(default)]
    pub surgery_due_day: Option<usize>,
    /// Surgery duration in minutes.
    pub surgery_duration: u32,
    /// Surgeon performing the surgery.
    pub surgeon_id: String,
    /// Rooms this patient can never be placed in.
    #[serde(default)]
    pub incompatible_room_ids: Vec<String>,
    /// Nursing workload produced per (day-offset × shift).
    pub workload_produced: Vec<u32>,
    /// Nurse skill level required per (day-offset × shift).
    pub skill_level_required: Vec<u32>,
}

impl Patient {
    /// Latest admissible admission day: the explicit due day, or for
    /// optional patients the last day their full stay fits the horizon.
    pub fn effective_due_day(&self, days: usize) -> usize {
        self.surgery_due_day
            .unwrap_or_else(|| days.saturating_sub(self.length_of_stay))
    }
}

/// A patient already admitted before the horizon starts.
///
/// Occupies a fixed room from day 0 and has no surgery fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occupant {
    /// Unique occupant identifier.
    pub id: String,
    /// Gender label.
    pub gender: String,
    /// Age group label.
    pub age_group: String,
    /// Remaining stay length from day 0.
    pub length_of_stay: usize,
    /// Nursing workload produced per (day-offset × shift).
    pub workload_produced: Vec<u32>,
    /// Nurse skill level required per (day-offset × shift).
    pub skill_level_required: Vec<u32>,
    /// The room the occupant already lives in.
    pub room_id: String,
}

/// A surgeon with a per-day surgery time budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surgeon {
    pub id: String,
    /// Maximum surgery minutes per day, indexed by day.
    pub max_surgery_time: Vec<u32>,
}

/// An operating theater with a per-day availability budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingTheater {
    pub id: String,
    /// Available minutes per day, indexed by day.
    pub availability: Vec<u32>,
}

/// A room with a fixed bed capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Number of beds (simultaneous occupants).
    pub capacity: usize,
}

/// A rostered duty window of a nurse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingShift {
    pub day: usize,
    /// Shift name, one of the instance's `shift_types`.
    pub shift: String,
    /// Maximum nursing workload the nurse can absorb in this window.
    pub max_load: u32,
}

/// A nurse with a skill level and a duty roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nurse {
    pub id: String,
    /// Skill rank on the instance's totally ordered skill scale.
    pub skill_level: u32,
    /// Windows the nurse is rostered for.
    pub working_shifts: Vec<WorkingShift>,
}

/// Weights of the eight soft constraints, as configured per instance.
///
/// Field names follow the persisted format verbatim (including the
/// `nurse_eccessive_workload` spelling the format uses).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    /// S1: age-group spread inside a room.
    pub room_mixed_age: u64,
    /// S2: nurse skill below the required level.
    pub room_nurse_skill: u64,
    /// S3: distinct nurses per patient across the stay.
    pub continuity_of_care: u64,
    /// S4: nurse workload above the configured maximum.
    pub nurse_eccessive_workload: u64,
    /// S5: distinct (day, operating theater) pairs in use.
    pub open_operating_theater: u64,
    /// S6: surgeons split across theaters on one day.
    pub surgeon_transfer: u64,
    /// S7: admission delay past the release day.
    pub patient_delay: u64,
    /// S8: optional patients left unscheduled.
    pub unscheduled_optional: u64,
}

/// The full persisted instance: scalars, weights, and entity arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceData {
    /// Planning horizon in days.
    pub days: usize,
    /// Totally ordered skill scale.
    pub skill_levels: Vec<u32>,
    /// Ordered shift names subdividing each day.
    pub shift_types: Vec<String>,
    /// Ordered age-group labels (order defines the rank used by S1).
    pub age_groups: Vec<String>,
    pub weights: Weights,
    pub occupants: Vec<Occupant>,
    pub patients: Vec<Patient>,
    pub surgeons: Vec<Surgeon>,
    pub operating_theaters: Vec<OperatingTheater>,
    pub rooms: Vec<Room>,
    pub nurses: Vec<Nurse>,
}
