//! Zone definitions.

use crate::core::constants::{FISH_PER_ZONE, ZONE_COUNT};
use crate::fishing::catalog::CATALOG;
use crate::fishing::types::FishDefinition;

/// A fishing location.
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub index: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub fish: &'static [FishDefinition; FISH_PER_ZONE],
}

impl Zone {
    /// Number shown to the player (1-based).
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn has_fish(&self, name: &str) -> bool {
        self.fish.iter().any(|f| f.name == name)
    }
}

pub static ZONES: [Zone; ZONE_COUNT] = [
    Zone {
        index: 0,
        name: "City Lakes",
        description: "Park ponds and reservoirs, calm and forgiving",
        fish: &CATALOG[0],
    },
    Zone {
        index: 1,
        name: "River Delta",
        description: "Reed channels where the river meets the sea",
        fish: &CATALOG[1],
    },
    Zone {
        index: 2,
        name: "Open Sea",
        description: "Deep water, big prizes",
        fish: &CATALOG[2],
    },
];

pub fn get_all_zones() -> &'static [Zone] {
    &ZONES
}

pub fn get_zone(index: usize) -> Option<&'static Zone> {
    ZONES.get(index)
}
