//! Catch resolution.
//!
//! A fishing action rolls against the equipment's fail chance, optionally
//! passes a reaction gate, rolls a rarity tier, looks the species up in the
//! current zone's catalog and credits its value to the player.

use rand::Rng;
use tracing::debug;

use super::catalog::fish_for;
use super::types::{CaughtFish, FishDefinition, FishRarity};
use crate::challenges::{GateOutcome, ReactionGate};
use crate::core::game_state::GameState;
use crate::core::rng::roll_unit;

/// What happened on one cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatchOutcome {
    /// The catch roll failed.
    Escaped,
    /// The catch roll succeeded but the reaction gate did not.
    GateFailed(GateOutcome),
    Caught {
        fish: CaughtFish,
        /// Zone completion bonus paid by this catch, if any
        completion_bonus: Option<f64>,
    },
}

/// Maps a uniform draw in `[0, 1)` to a tier: the first tier, in fixed order,
/// whose cumulative boundary is at or above the draw. Falls back to Common.
pub fn rarity_for_roll(roll: f64) -> FishRarity {
    let mut cumulative = 0.0;
    for rarity in FishRarity::all() {
        cumulative += rarity.chance();
        if roll <= cumulative {
            return rarity;
        }
    }
    FishRarity::Common
}

/// Rolls a rarity tier: Common 50%, Rare 30%, Epic 15%, Legendary 5%.
pub fn roll_fish_rarity(rng: &mut impl Rng) -> FishRarity {
    rarity_for_roll(roll_unit(rng))
}

/// Sale value: `base * bait * (zone + 1) * rarity multiplier`.
pub fn fish_value(fish: &FishDefinition, bait_multiplier: f64) -> f64 {
    fish.base_value
        * bait_multiplier
        * (fish.zone_index as f64 + 1.0)
        * fish.rarity.value_multiplier()
}

/// Resolves one cast in the player's current zone.
///
/// Only a successful catch changes money or the collection; escapes and
/// failed gates leave everything but the cast counter untouched.
pub fn go_fishing(
    state: &mut GameState,
    rng: &mut impl Rng,
    gate: &mut impl ReactionGate,
) -> CatchOutcome {
    let zone = state.current_zone();
    state.total_casts += 1;

    if !state.equipment.attempt_catch(zone, rng) {
        debug!(zone, "fish got away");
        return CatchOutcome::Escaped;
    }

    let gate_outcome = gate.check(rng);
    if !gate_outcome.passed() {
        debug!(zone, ?gate_outcome, "reaction gate failed");
        return CatchOutcome::GateFailed(gate_outcome);
    }

    let rarity = roll_fish_rarity(rng);
    let Some(def) = fish_for(zone, rarity) else {
        // current_zone is only ever set to a valid index
        return CatchOutcome::Escaped;
    };
    let fish = CaughtFish {
        name: def.name,
        rarity,
        zone_index: zone,
        value: fish_value(def, state.bait_multiplier()),
    };
    let completion_bonus = state.record_catch(&fish);
    debug!(zone, name = fish.name, %rarity, value = fish.value, "fish caught");

    CatchOutcome::Caught {
        fish,
        completion_bonus,
    }
}
