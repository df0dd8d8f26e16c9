//! Reduced Variable Neighborhood Search solver.
//!
//! A greedy builder produces the starting assignment, five neighborhood
//! operators perturb it, and the runner alternates shaking with a
//! first-improvement variable neighborhood descent under a wall-clock
//! budget. All randomness flows through one seedable RNG so a seeded run
//! is reproducible.

pub mod builder;
pub mod config;
pub mod neighborhoods;
pub mod runner;

pub use builder::build_initial_solution;
pub use config::RvnsConfig;
pub use neighborhoods::NEIGHBORHOOD_COUNT;
pub use runner::{RvnsResult, RvnsSolver};
