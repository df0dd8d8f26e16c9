//! Integrated hospital admission and nurse-to-room scheduling.
//!
//! Assigns every admitted patient an admission day, a room, and an
//! operating theater, and every nurse a set of rooms per working shift,
//! minimizing the weighted sum of soft-constraint costs while driving
//! hard-constraint violations to zero via a large fixed penalty.
//!
//! # Architecture
//!
//! - [`instance`]: the persisted instance model and derived lookups
//!   (id indices, room occupancy expansion, nurse coverage).
//! - [`solution`]: the persisted solution model.
//! - [`eval`]: one pure scoring function per constraint plus the
//!   penalty-weighted aggregator.
//! - [`rvns`]: the Reduced VNS solver — greedy construction, five
//!   neighborhood operators, shake + first-improvement descent under a
//!   wall-clock budget.

pub mod eval;
pub mod instance;
pub mod rvns;
pub mod solution;
