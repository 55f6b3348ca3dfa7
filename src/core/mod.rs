//! Core game state, rules, and shared plumbing.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod rng;

pub use config::{ConfigFile, GameRules, StatScope, UpgradeSchedule, UpgradeTracking, Variant};
pub use error::{ConfigError, GameError};
pub use game_state::{GameState, TravelReceipt, UpgradeReceipt};
