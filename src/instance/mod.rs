//! Instance model: immutable problem data and its indexed view.
//!
//! - **`types`**: serde types mirroring the persisted instance format
//! - **`hospital`**: the indexed [`Hospital`] with O(1) id lookups and the
//!   derived occupancy/coverage queries the evaluator consumes
//! - **`loader`**: fatal-on-failure instance file loading

pub mod hospital;
pub mod loader;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use hospital::{Hospital, StaySlot};
pub use loader::LoadError;
pub use types::{
    InstanceData, Nurse, Occupant, OperatingTheater, Patient, Room, Surgeon, Weights,
    WorkingShift,
};
