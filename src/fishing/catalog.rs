//! The fish catalog: four species per zone, one for each rarity tier.

use super::types::{FishDefinition, FishRarity};
use crate::core::constants::{FISH_PER_ZONE, ZONE_COUNT};

const fn fish(
    name: &'static str,
    rarity: FishRarity,
    base_value: f64,
    zone_index: usize,
) -> FishDefinition {
    FishDefinition {
        name,
        rarity,
        base_value,
        zone_index,
    }
}

/// Species by zone, each row in rarity order.
pub static CATALOG: [[FishDefinition; FISH_PER_ZONE]; ZONE_COUNT] = [
    // City Lakes
    [
        fish("Carp", FishRarity::Common, 5.0, 0),
        fish("Perch", FishRarity::Rare, 8.0, 0),
        fish("Pike", FishRarity::Epic, 15.0, 0),
        fish("Golden Carp", FishRarity::Legendary, 40.0, 0),
    ],
    // River Delta
    [
        fish("Rudd", FishRarity::Common, 8.0, 1),
        fish("Zander", FishRarity::Rare, 12.0, 1),
        fish("Wels Catfish", FishRarity::Epic, 25.0, 1),
        fish("Starry Sturgeon", FishRarity::Legendary, 60.0, 1),
    ],
    // Open Sea
    [
        fish("Sprat", FishRarity::Common, 10.0, 2),
        fish("Mackerel", FishRarity::Rare, 16.0, 2),
        fish("Turbot", FishRarity::Epic, 32.0, 2),
        fish("Beluga Sturgeon", FishRarity::Legendary, 90.0, 2),
    ],
];

/// All species of `zone`, `None` for an unknown zone.
pub fn zone_fish(zone: usize) -> Option<&'static [FishDefinition; FISH_PER_ZONE]> {
    CATALOG.get(zone)
}

/// The species of `zone` at the given tier.
pub fn fish_for(zone: usize, rarity: FishRarity) -> Option<&'static FishDefinition> {
    zone_fish(zone).map(|row| &row[rarity.index()])
}
