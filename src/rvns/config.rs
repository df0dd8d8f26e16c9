//! Solver configuration.

/// Parameters of one solver run.
#[derive(Debug, Clone)]
pub struct RvnsConfig {
    /// Wall-clock budget for the whole run, in milliseconds. The deadline
    /// is checked between iterations, never mid-evaluation.
    pub time_limit_ms: u64,
    /// RNG seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for RvnsConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            seed: None,
        }
    }
}

impl RvnsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_limit_ms(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
