//! Zones and zone progression.
//!
//! Three zones, each with its own four-species catalog. Moving up is gated on
//! equipment (see `GameState::is_zone_unlocked`); completing a zone's
//! collection pays a one-time bonus.

mod data;
mod progression;

pub use data::{get_all_zones, get_zone, Zone, ZONES};
pub use progression::ZoneProgression;
