//! Reduced VNS main loop.
//!
//! Outer loop: for k = 1..=k_max, shake the incumbent with neighborhood
//! k, descend with a first-improvement VND, and accept only strictly
//! better totals (hard penalties included). The wall-clock deadline is
//! checked at loop boundaries only, so a run always returns the best
//! complete solution seen.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::builder::build_initial_solution;
use super::config::RvnsConfig;
use super::neighborhoods::{self, NEIGHBORHOOD_COUNT};
use crate::eval::{evaluate, CostBreakdown};
use crate::instance::Hospital;
use crate::solution::Solution;

/// Outcome of one solver run.
#[derive(Debug, Clone)]
pub struct RvnsResult {
    pub best: Solution,
    pub best_cost: u64,
    pub breakdown: CostBreakdown,
    pub initial_cost: u64,
    pub iterations: u64,
    /// Best cost after each outer pass over the neighborhoods.
    pub cost_history: Vec<u64>,
}

pub struct RvnsSolver;

impl RvnsSolver {
    /// Runs the search until the configured time budget is spent.
    pub fn run(hospital: &Hospital, config: &RvnsConfig) -> RvnsResult {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Instant::now();
        let deadline = Duration::from_millis(config.time_limit_ms);

        let mut best = build_initial_solution(hospital, &mut rng);
        let (mut best_cost, mut breakdown) = evaluate(&best, hospital);
        let initial_cost = best_cost;
        info!(seed, initial_cost, "starting search");

        let mut iterations = 0u64;
        let mut cost_history = Vec::new();

        while start.elapsed() < deadline {
            let mut k = 1;
            while k <= NEIGHBORHOOD_COUNT && start.elapsed() < deadline {
                iterations += 1;
                let shaken = shake(&best, hospital, k, &mut rng);
                let candidate = local_search(shaken, hospital, &mut rng);
                let (candidate_cost, candidate_breakdown) = evaluate(&candidate, hospital);
                if candidate_cost < best_cost {
                    debug!(k, from = best_cost, to = candidate_cost, "improved");
                    best = candidate;
                    best_cost = candidate_cost;
                    breakdown = candidate_breakdown;
                    k = 1;
                } else {
                    k += 1;
                }
            }
            cost_history.push(best_cost);
        }

        info!(best_cost, iterations, "search finished");
        RvnsResult {
            best,
            best_cost,
            breakdown,
            initial_cost,
            iterations,
            cost_history,
        }
    }
}

/// Perturbs a clone of the incumbent by applying neighborhood `k` (1-based)
/// `k` times, so higher neighborhoods jump further.
fn shake<R: Rng>(solution: &Solution, hospital: &Hospital, k: usize, rng: &mut R) -> Solution {
    let mut shaken = solution.clone();
    for _ in 0..k {
        shaken = neighborhoods::apply(k - 1, &shaken, hospital, rng);
    }
    shaken
}

/// First-improvement VND over all neighborhoods: any strict improvement
/// restarts from the first neighborhood, exhaustion of all of them ends
/// the descent.
fn local_search<R: Rng>(mut solution: Solution, hospital: &Hospital, rng: &mut R) -> Solution {
    let (mut cost, _) = evaluate(&solution, hospital);
    let mut k = 0;
    while k < NEIGHBORHOOD_COUNT {
        let candidate = neighborhoods::apply(k, &solution, hospital, rng);
        let (candidate_cost, _) = evaluate(&candidate, hospital);
        if candidate_cost < cost {
            solution = candidate;
            cost = candidate_cost;
            k = 0;
        } else {
            k += 1;
        }
    }
    solution
}
