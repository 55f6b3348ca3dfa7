//! Economy balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of sessions with a greedy automated angler to analyze:
//! - How many actions it takes to finish every collection
//! - When each zone is reached under each rule preset
//! - Money on hand, upgrades bought, and bonuses paid
//! - Observed rarity distribution against the configured one

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{choose_action, run_simulation, simulate_single_run, BotAction, RunStats};
