//! Fishing system: catalog, types, and catch resolution.

pub mod catalog;
pub mod logic;
pub mod types;

pub use catalog::{fish_for, zone_fish, CATALOG};
pub use logic::{fish_value, go_fishing, rarity_for_roll, roll_fish_rarity, CatchOutcome};
pub use types::{CaughtFish, FishDefinition, FishRarity};
