//! Game rules and the optional TOML rules file.
//!
//! The three historical editions of the game differ only in their economy and
//! progression rules, so each one is a [`Variant`] preset of [`GameRules`]. A
//! rules file picks a variant and can override individual rules:
//!
//! ```toml
//! variant = "tycoon"
//!
//! [rules]
//! starting_money = 250.0
//! typing_challenge = true
//! travel_costs = [0.0, 500.0, 1500.0]
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::error::ConfigError;

/// Preset rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Free travel, flat upgrade prices, one shared upgrade track.
    Classic,
    /// Zone gating, zone-scaled prices, travel costs, completion bonuses.
    Tycoon,
    /// Tycoon rules plus the typing reaction gate.
    #[default]
    Reflex,
}

impl Variant {
    pub fn all() -> [Variant; 3] {
        [Variant::Classic, Variant::Tycoon, Variant::Reflex]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Tycoon => "tycoon",
            Variant::Reflex => "reflex",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::all()
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::Invalid(format!("unknown variant '{}'", s)))
    }
}

/// How upgrade prices grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeSchedule {
    /// `50 + level * 50`, independent of zone.
    Flat,
    /// `100 * (zone + 1) * (level + 1)`.
    ZoneScaled,
}

/// Where upgrade levels are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeTracking {
    /// A single pair of tracks, whatever zone the player is in.
    Shared,
    /// Separate rod and bait tracks for every zone.
    PerZone,
}

/// Which upgrade levels feed the fail chance and bait multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatScope {
    /// Levels from every zone add up; an upgrade helps everywhere.
    Global,
    /// Only the current zone's levels count.
    PerZone,
}

/// The complete rule set for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    pub variant: Variant,
    pub starting_money: f64,
    pub upgrade_schedule: UpgradeSchedule,
    pub upgrade_tracking: UpgradeTracking,
    pub stat_scope: StatScope,
    /// Zone N+1 requires every lower zone fully upgraded.
    pub zone_gating: bool,
    pub travel_costs: [f64; ZONE_COUNT],
    /// One-time payout for catching every species of a zone.
    pub completion_bonus: bool,
    pub typing_challenge: bool,
    pub typing_length: usize,
    pub typing_timeout_secs: f64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl GameRules {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Tycoon => Self::tycoon(),
            Variant::Reflex => Self::reflex(),
        }
    }

    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            starting_money: CLASSIC_STARTING_MONEY,
            upgrade_schedule: UpgradeSchedule::Flat,
            upgrade_tracking: UpgradeTracking::Shared,
            stat_scope: StatScope::Global,
            zone_gating: false,
            travel_costs: [0.0; ZONE_COUNT],
            completion_bonus: false,
            typing_challenge: false,
            typing_length: TYPING_CHALLENGE_LENGTH,
            typing_timeout_secs: TYPING_CHALLENGE_TIMEOUT_SECS,
        }
    }

    pub fn tycoon() -> Self {
        Self {
            variant: Variant::Tycoon,
            starting_money: STARTING_MONEY,
            upgrade_schedule: UpgradeSchedule::ZoneScaled,
            upgrade_tracking: UpgradeTracking::PerZone,
            stat_scope: StatScope::Global,
            zone_gating: true,
            travel_costs: TRAVEL_COSTS,
            completion_bonus: true,
            typing_challenge: false,
            typing_length: TYPING_CHALLENGE_LENGTH,
            typing_timeout_secs: TYPING_CHALLENGE_TIMEOUT_SECS,
        }
    }

    pub fn reflex() -> Self {
        Self {
            variant: Variant::Reflex,
            typing_challenge: true,
            ..Self::tycoon()
        }
    }

    /// Price of raising a track from `level` to `level + 1` in `zone`.
    pub fn upgrade_cost(&self, zone: usize, level: u32) -> f64 {
        match self.upgrade_schedule {
            UpgradeSchedule::Flat => FLAT_UPGRADE_BASE + level as f64 * FLAT_UPGRADE_STEP,
            UpgradeSchedule::ZoneScaled => {
                ZONE_SCALED_UPGRADE_BASE * (zone as f64 + 1.0) * (level as f64 + 1.0)
            }
        }
    }

    /// Travel price for `zone`, `None` if the zone does not exist.
    pub fn travel_cost(&self, zone: usize) -> Option<f64> {
        self.travel_costs.get(zone).copied()
    }

    /// One-time payout for completing `zone`'s collection.
    pub fn completion_bonus_for(&self, zone: usize) -> f64 {
        COMPLETION_BONUS_BASE * (zone as f64 + 1.0)
    }

    /// Typing gate deadline. Falls back to the default for values that
    /// `validate` would reject.
    pub fn typing_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.typing_timeout_secs)
            .ok()
            .filter(|d| !d.is_zero() && d.as_secs_f64() <= MAX_TYPING_CHALLENGE_TIMEOUT_SECS)
            .unwrap_or_else(|| Duration::from_secs_f64(TYPING_CHALLENGE_TIMEOUT_SECS))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.starting_money.is_finite() || self.starting_money < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "starting_money must be a non-negative number, got {}",
                self.starting_money
            )));
        }
        if let Some(cost) = self
            .travel_costs
            .iter()
            .find(|c| !c.is_finite() || **c < 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "travel costs must be non-negative, got {}",
                cost
            )));
        }
        if self.typing_length == 0 || self.typing_length > MAX_TYPING_CHALLENGE_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "typing_length must be between 1 and {}, got {}",
                MAX_TYPING_CHALLENGE_LENGTH, self.typing_length
            )));
        }
        if !(self.typing_timeout_secs > 0.0
            && self.typing_timeout_secs <= MAX_TYPING_CHALLENGE_TIMEOUT_SECS)
        {
            return Err(ConfigError::Invalid(format!(
                "typing_timeout_secs must be above 0 and at most {}, got {}",
                MAX_TYPING_CHALLENGE_TIMEOUT_SECS, self.typing_timeout_secs
            )));
        }
        Ok(())
    }
}

/// Individual rule overrides read from a rules file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverrides {
    pub starting_money: Option<f64>,
    pub upgrade_schedule: Option<UpgradeSchedule>,
    pub upgrade_tracking: Option<UpgradeTracking>,
    pub stat_scope: Option<StatScope>,
    pub zone_gating: Option<bool>,
    pub travel_costs: Option<[f64; ZONE_COUNT]>,
    pub completion_bonus: Option<bool>,
    pub typing_challenge: Option<bool>,
    pub typing_length: Option<usize>,
    pub typing_timeout_secs: Option<f64>,
}

impl RuleOverrides {
    fn apply(&self, rules: &mut GameRules) {
        if let Some(v) = self.starting_money {
            rules.starting_money = v;
        }
        if let Some(v) = self.upgrade_schedule {
            rules.upgrade_schedule = v;
        }
        if let Some(v) = self.upgrade_tracking {
            rules.upgrade_tracking = v;
        }
        if let Some(v) = self.stat_scope {
            rules.stat_scope = v;
        }
        if let Some(v) = self.zone_gating {
            rules.zone_gating = v;
        }
        if let Some(v) = self.travel_costs {
            rules.travel_costs = v;
        }
        if let Some(v) = self.completion_bonus {
            rules.completion_bonus = v;
        }
        if let Some(v) = self.typing_challenge {
            rules.typing_challenge = v;
        }
        if let Some(v) = self.typing_length {
            rules.typing_length = v;
        }
        if let Some(v) = self.typing_timeout_secs {
            rules.typing_timeout_secs = v;
        }
    }
}

/// Contents of a rules file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub variant: Option<Variant>,
    pub rules: RuleOverrides,
}

impl ConfigFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolves the final rules. A variant given on the command line wins over
    /// the file's; the file's overrides apply on top of the chosen preset.
    pub fn into_rules(self, variant_override: Option<Variant>) -> Result<GameRules, ConfigError> {
        let variant = variant_override.or(self.variant).unwrap_or_default();
        let mut rules = GameRules::for_variant(variant);
        self.rules.apply(&mut rules);
        rules.validate()?;
        Ok(rules)
    }
}
