//! Simulation configuration.

use crate::core::config::Variant;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Menu actions per session before giving up
    pub max_actions_per_run: u64,

    /// Rule preset the automated player follows
    pub variant: Variant,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_actions_per_run: 20_000,
            variant: Variant::Tycoon,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, reproducible config for quick balance checks
    pub fn quick(variant: Variant) -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            variant,
            ..Default::default()
        }
    }
}
