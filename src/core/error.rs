//! Error types for game actions and configuration loading.
//!
//! [`GameError`] is never fatal: every variant describes a refused action that
//! left the game state untouched, and the console reports it as a message.

use std::path::PathBuf;

use crate::equipment::UpgradeTrack;

/// A player action that was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// The player cannot pay for the action.
    #[error("not enough money: costs ${cost:.2}, you have ${balance:.2}")]
    InsufficientFunds {
        /// Price of the refused action.
        cost: f64,
        /// Money on hand when it was refused.
        balance: f64,
    },

    /// The upgrade track is already at its cap for this zone.
    #[error("{track} is already at max level for zone {}", .zone + 1)]
    UpgradeMaxed {
        /// The capped track.
        track: UpgradeTrack,
        /// Zone index the upgrade was bought in.
        zone: usize,
    },

    /// The zone requires every lower zone to be fully upgraded first.
    #[error("zone {} is locked: max out rod and bait in every earlier zone first", .zone + 1)]
    ZoneLocked {
        /// Zone index that was refused.
        zone: usize,
    },

    /// The zone index does not exist.
    #[error("there is no zone {}", .0 + 1)]
    InvalidZone(usize),
}

/// Errors raised while loading a rules file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rule: {0}")]
    Invalid(String),
}
