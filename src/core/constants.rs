// World layout
pub const ZONE_COUNT: usize = 3;
pub const FISH_PER_ZONE: usize = 4;

// Equipment
pub const MAX_UPGRADE_LEVEL: u32 = 4;
pub const BASE_FAIL_PERCENT: u32 = 60;
pub const ROD_STEP_PERCENT: u32 = 5;
pub const BASE_BAIT_MULTIPLIER: f64 = 1.0;
pub const BAIT_STEP: f64 = 0.5;

// Rarity distribution, in tier order (Common, Rare, Epic, Legendary)
pub const RARITY_CHANCES: [f64; 4] = [0.50, 0.30, 0.15, 0.05];
pub const RARITY_VALUE_MULTIPLIERS: [f64; 4] = [1.0, 1.5, 2.5, 5.0];

// Economy
pub const STARTING_MONEY: f64 = 100.0;
pub const CLASSIC_STARTING_MONEY: f64 = 50.0;
pub const ZONE_SCALED_UPGRADE_BASE: f64 = 100.0;
pub const FLAT_UPGRADE_BASE: f64 = 50.0;
pub const FLAT_UPGRADE_STEP: f64 = 50.0;
pub const TRAVEL_COSTS: [f64; ZONE_COUNT] = [0.0, 1000.0, 3000.0];
pub const COMPLETION_BONUS_BASE: f64 = 500.0;

// Reaction gate
pub const TYPING_CHALLENGE_LENGTH: usize = 5;
pub const TYPING_CHALLENGE_TIMEOUT_SECS: f64 = 3.0;
pub const MAX_TYPING_CHALLENGE_LENGTH: usize = 16;
pub const MAX_TYPING_CHALLENGE_TIMEOUT_SECS: f64 = 60.0;
