//! Fishing data structures.

use std::fmt;

use crate::core::constants::{RARITY_CHANCES, RARITY_VALUE_MULTIPLIERS};

/// Rarity tiers, in the fixed order used by the rarity roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FishRarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl FishRarity {
    pub fn all() -> [FishRarity; 4] {
        [
            FishRarity::Common,
            FishRarity::Rare,
            FishRarity::Epic,
            FishRarity::Legendary,
        ]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            FishRarity::Common => "Common",
            FishRarity::Rare => "Rare",
            FishRarity::Epic => "Epic",
            FishRarity::Legendary => "Legendary",
        }
    }

    /// Probability of this tier on a successful catch.
    pub fn chance(&self) -> f64 {
        RARITY_CHANCES[self.index()]
    }

    pub fn value_multiplier(&self) -> f64 {
        RARITY_VALUE_MULTIPLIERS[self.index()]
    }
}

impl fmt::Display for FishRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A species in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishDefinition {
    pub name: &'static str,
    pub rarity: FishRarity,
    pub base_value: f64,
    pub zone_index: usize,
}

/// A fish that has been landed, with its sale value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaughtFish {
    pub name: &'static str,
    pub rarity: FishRarity,
    pub zone_index: usize,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_chances_sum_to_one() {
        let total: f64 = FishRarity::all().iter().map(|r| r.chance()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rarity_order() {
        assert!(FishRarity::Common < FishRarity::Rare);
        assert!(FishRarity::Epic < FishRarity::Legendary);
        for (i, rarity) in FishRarity::all().iter().enumerate() {
            assert_eq!(rarity.index(), i);
        }
    }

    #[test]
    fn test_value_multipliers() {
        assert_eq!(FishRarity::Common.value_multiplier(), 1.0);
        assert_eq!(FishRarity::Rare.value_multiplier(), 1.5);
        assert_eq!(FishRarity::Epic.value_multiplier(), 2.5);
        assert_eq!(FishRarity::Legendary.value_multiplier(), 5.0);
    }
}
