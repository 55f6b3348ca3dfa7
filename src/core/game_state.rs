use std::collections::HashMap;

use tracing::info;

use super::config::GameRules;
use super::constants::{MAX_UPGRADE_LEVEL, ZONE_COUNT};
use super::error::GameError;
use crate::equipment::{Equipment, UpgradeTrack};
use crate::fishing::types::CaughtFish;
use crate::zones::{get_zone, ZoneProgression};

/// A completed equipment purchase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeReceipt {
    pub track: UpgradeTrack,
    pub zone: usize,
    pub new_level: u32,
    pub cost: f64,
}

/// A completed (or no-op) zone change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelReceipt {
    pub from: usize,
    pub to: usize,
    pub cost: f64,
}

/// Everything the player owns during one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub player_name: String,
    pub money: f64,
    pub equipment: Equipment,
    pub zone_progression: ZoneProgression,
    /// Lifetime catches by species name
    pub caught_counts: HashMap<&'static str, u32>,
    pub total_casts: u64,
    pub rules: GameRules,
}

impl GameState {
    /// Creates a new session in zone 0 with the rules' starting money
    pub fn new(player_name: String, rules: GameRules) -> Self {
        Self {
            player_name,
            money: rules.starting_money,
            equipment: Equipment::new(rules.upgrade_tracking, rules.stat_scope),
            zone_progression: ZoneProgression::new(),
            caught_counts: HashMap::new(),
            total_casts: 0,
            rules,
        }
    }

    pub fn current_zone(&self) -> usize {
        self.zone_progression.current_zone
    }

    pub fn fail_chance(&self) -> f64 {
        self.equipment.fail_chance(self.current_zone())
    }

    pub fn bait_multiplier(&self) -> f64 {
        self.equipment.bait_multiplier(self.current_zone())
    }

    pub fn upgrade_level(&self, track: UpgradeTrack) -> u32 {
        self.equipment.upgrade_count(self.current_zone(), track)
    }

    /// Price of the next `track` level in the current zone, `None` at the cap.
    pub fn upgrade_cost(&self, track: UpgradeTrack) -> Option<f64> {
        let level = self.upgrade_level(track);
        (level < MAX_UPGRADE_LEVEL).then(|| self.rules.upgrade_cost(self.current_zone(), level))
    }

    /// Buys one level of `track` for the current zone.
    ///
    /// Leaves the state untouched when the track is capped or the player
    /// cannot pay.
    pub fn attempt_upgrade(&mut self, track: UpgradeTrack) -> Result<UpgradeReceipt, GameError> {
        let zone = self.current_zone();
        let cost = self
            .upgrade_cost(track)
            .ok_or(GameError::UpgradeMaxed { track, zone })?;
        if self.money < cost {
            return Err(GameError::InsufficientFunds {
                cost,
                balance: self.money,
            });
        }

        let new_level = self.equipment.upgrade(zone, track)?;
        self.money -= cost;
        info!(%track, zone, new_level, cost, "upgrade purchased");

        Ok(UpgradeReceipt {
            track,
            zone,
            new_level,
            cost,
        })
    }

    /// Whether `zone` can be entered. With gating on, every lower zone must
    /// have both tracks at max level.
    pub fn is_zone_unlocked(&self, zone: usize) -> bool {
        if zone >= ZONE_COUNT {
            return false;
        }
        !self.rules.zone_gating || (0..zone).all(|z| self.equipment.is_zone_maxed(z))
    }

    pub fn travel_to_zone(&mut self, target: usize) -> Result<TravelReceipt, GameError> {
        let from = self.current_zone();
        if target == from {
            return Ok(TravelReceipt {
                from,
                to: target,
                cost: 0.0,
            });
        }

        let cost = self
            .rules
            .travel_cost(target)
            .ok_or(GameError::InvalidZone(target))?;
        if !self.is_zone_unlocked(target) {
            return Err(GameError::ZoneLocked { zone: target });
        }
        if self.money < cost {
            return Err(GameError::InsufficientFunds {
                cost,
                balance: self.money,
            });
        }

        self.money -= cost;
        self.zone_progression.current_zone = target;
        info!(from, to = target, cost, "travelled");

        Ok(TravelReceipt {
            from,
            to: target,
            cost,
        })
    }

    /// Credits a landed fish: money, lifetime count, zone collection, then the
    /// completion check. Returns the completion bonus if this catch paid one.
    pub fn record_catch(&mut self, fish: &CaughtFish) -> Option<f64> {
        self.money += fish.value;
        *self.caught_counts.entry(fish.name).or_insert(0) += 1;
        self.zone_progression.mark_caught(fish.zone_index, fish.name);
        self.check_zone_completion(fish.zone_index)
    }

    /// Pays `zone`'s completion bonus if the rules award one, the collection is
    /// complete, and it has not been paid before.
    pub fn check_zone_completion(&mut self, zone: usize) -> Option<f64> {
        if !self.rules.completion_bonus || !self.zone_progression.claim_bonus(zone) {
            return None;
        }
        let bonus = self.rules.completion_bonus_for(zone);
        self.money += bonus;
        info!(zone, bonus, "zone collection complete");
        Some(bonus)
    }

    pub fn is_zone_complete(&self, zone: usize) -> bool {
        self.zone_progression.is_zone_complete(zone)
    }

    pub fn caught_count(&self, name: &str) -> u32 {
        self.caught_counts.get(name).copied().unwrap_or(0)
    }

    pub fn total_fish_caught(&self) -> u32 {
        self.caught_counts.values().sum()
    }

    /// Name of the current zone.
    pub fn zone_name(&self) -> &'static str {
        get_zone(self.current_zone())
            .map(|z| z.name)
            .unwrap_or("Unknown")
    }
}
