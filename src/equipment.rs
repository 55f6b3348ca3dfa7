//! Rod and bait upgrades.
//!
//! Upgrade levels are counted per zone (or in one shared slot, depending on
//! [`UpgradeTracking`]). The fail chance and bait multiplier are derived from
//! those counts on demand, so they can never drift out of their bounds.

use std::fmt;

use rand::Rng;

use crate::core::config::{StatScope, UpgradeTracking};
use crate::core::constants::{
    BAIT_STEP, BASE_BAIT_MULTIPLIER, BASE_FAIL_PERCENT, MAX_UPGRADE_LEVEL, ROD_STEP_PERCENT,
    ZONE_COUNT,
};
use crate::core::error::GameError;
use crate::core::rng::roll_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeTrack {
    /// Lowers the chance a hooked fish gets away.
    Rod,
    /// Raises the value of every catch.
    Bait,
}

impl UpgradeTrack {
    pub fn all() -> [UpgradeTrack; 2] {
        [UpgradeTrack::Rod, UpgradeTrack::Bait]
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeTrack::Rod => "Rod",
            UpgradeTrack::Bait => "Bait",
        }
    }
}

impl fmt::Display for UpgradeTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rod and bait levels for one zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpgradeLevels {
    pub rod: u32,
    pub bait: u32,
}

impl UpgradeLevels {
    pub fn get(&self, track: UpgradeTrack) -> u32 {
        match track {
            UpgradeTrack::Rod => self.rod,
            UpgradeTrack::Bait => self.bait,
        }
    }

    fn get_mut(&mut self, track: UpgradeTrack) -> &mut u32 {
        match track {
            UpgradeTrack::Rod => &mut self.rod,
            UpgradeTrack::Bait => &mut self.bait,
        }
    }

    pub fn is_maxed(&self) -> bool {
        self.rod >= MAX_UPGRADE_LEVEL && self.bait >= MAX_UPGRADE_LEVEL
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    levels: [UpgradeLevels; ZONE_COUNT],
    tracking: UpgradeTracking,
    scope: StatScope,
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new(UpgradeTracking::PerZone, StatScope::Global)
    }
}

impl Equipment {
    pub fn new(tracking: UpgradeTracking, scope: StatScope) -> Self {
        Self {
            levels: [UpgradeLevels::default(); ZONE_COUNT],
            tracking,
            scope,
        }
    }

    /// Index into `levels` that holds `zone`'s counters.
    fn slot(&self, zone: usize) -> Option<usize> {
        if zone >= ZONE_COUNT {
            return None;
        }
        match self.tracking {
            UpgradeTracking::Shared => Some(0),
            UpgradeTracking::PerZone => Some(zone),
        }
    }

    /// Levels for `zone`, all zero if the zone does not exist.
    pub fn levels(&self, zone: usize) -> UpgradeLevels {
        self.slot(zone)
            .map(|slot| self.levels[slot])
            .unwrap_or_default()
    }

    pub fn upgrade_count(&self, zone: usize, track: UpgradeTrack) -> u32 {
        self.levels(zone).get(track)
    }

    pub fn is_zone_maxed(&self, zone: usize) -> bool {
        self.slot(zone)
            .is_some_and(|slot| self.levels[slot].is_maxed())
    }

    /// Sum of `track` levels that apply while fishing in `zone`.
    fn effective_level(&self, zone: usize, track: UpgradeTrack) -> u32 {
        match self.scope {
            StatScope::Global => self.levels.iter().map(|l| l.get(track)).sum(),
            StatScope::PerZone => self.upgrade_count(zone, track),
        }
    }

    /// Fail chance in whole percent, floored at zero.
    pub fn fail_chance_percent(&self, zone: usize) -> u32 {
        let reduction = ROD_STEP_PERCENT * self.effective_level(zone, UpgradeTrack::Rod);
        BASE_FAIL_PERCENT.saturating_sub(reduction)
    }

    pub fn fail_chance(&self, zone: usize) -> f64 {
        self.fail_chance_percent(zone) as f64 / 100.0
    }

    pub fn bait_multiplier(&self, zone: usize) -> f64 {
        BASE_BAIT_MULTIPLIER + BAIT_STEP * self.effective_level(zone, UpgradeTrack::Bait) as f64
    }

    /// One catch roll: succeeds iff the draw lands above the fail chance.
    pub fn attempt_catch(&self, zone: usize, rng: &mut impl Rng) -> bool {
        roll_unit(rng) > self.fail_chance(zone)
    }

    /// Raises `track` by one level in `zone` and returns the new level.
    pub fn upgrade(&mut self, zone: usize, track: UpgradeTrack) -> Result<u32, GameError> {
        let slot = self.slot(zone).ok_or(GameError::InvalidZone(zone))?;
        let level = self.levels[slot].get_mut(track);
        if *level >= MAX_UPGRADE_LEVEL {
            return Err(GameError::UpgradeMaxed { track, zone });
        }
        *level += 1;
        Ok(*level)
    }

    pub fn upgrade_rod(&mut self, zone: usize) -> Result<u32, GameError> {
        self.upgrade(zone, UpgradeTrack::Rod)
    }

    pub fn upgrade_bait(&mut self, zone: usize) -> Result<u32, GameError> {
        self.upgrade(zone, UpgradeTrack::Bait)
    }
}
