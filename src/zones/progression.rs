//! Per-zone collection and completion bookkeeping.

use std::collections::HashSet;

use super::data::get_zone;
use crate::core::constants::ZONE_COUNT;

/// Tracks the player's position and which species each zone has yielded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneProgression {
    /// Current zone index (0-based)
    pub current_zone: usize,
    /// Species caught at least once, per zone
    caught_species: [HashSet<&'static str>; ZONE_COUNT],
    /// Zones whose completion bonus has already been paid
    bonus_awarded: [bool; ZONE_COUNT],
}

impl ZoneProgression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags `name` as caught in `zone`. Returns true the first time.
    pub fn mark_caught(&mut self, zone: usize, name: &'static str) -> bool {
        match self.caught_species.get_mut(zone) {
            Some(set) => set.insert(name),
            None => false,
        }
    }

    pub fn has_caught(&self, zone: usize, name: &str) -> bool {
        self.caught_species
            .get(zone)
            .is_some_and(|set| set.contains(name))
    }

    /// Number of the zone's species caught so far.
    pub fn species_caught(&self, zone: usize) -> usize {
        match get_zone(zone) {
            Some(z) => z.fish.iter().filter(|f| self.has_caught(zone, f.name)).count(),
            None => 0,
        }
    }

    /// A zone is complete once every one of its species has been caught.
    pub fn is_zone_complete(&self, zone: usize) -> bool {
        get_zone(zone).is_some_and(|z| z.fish.iter().all(|f| self.has_caught(zone, f.name)))
    }

    pub fn is_bonus_awarded(&self, zone: usize) -> bool {
        self.bonus_awarded.get(zone).copied().unwrap_or(false)
    }

    /// Claims `zone`'s completion bonus. Returns true only on the first claim
    /// of a complete zone.
    pub fn claim_bonus(&mut self, zone: usize) -> bool {
        if !self.is_zone_complete(zone) || self.is_bonus_awarded(zone) {
            return false;
        }
        self.bonus_awarded[zone] = true;
        true
    }

    pub fn zones_completed(&self) -> usize {
        (0..ZONE_COUNT).filter(|&z| self.is_zone_complete(z)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catch_all(prog: &mut ZoneProgression, zone: usize) {
        for fish in get_zone(zone).unwrap().fish {
            prog.mark_caught(zone, fish.name);
        }
    }

    #[test]
    fn test_new_progression() {
        let prog = ZoneProgression::new();
        assert_eq!(prog.current_zone, 0);
        assert_eq!(prog.zones_completed(), 0);
        for zone in 0..ZONE_COUNT {
            assert!(!prog.is_zone_complete(zone));
            assert!(!prog.is_bonus_awarded(zone));
        }
    }

    #[test]
    fn test_mark_caught_reports_first_catch() {
        let mut prog = ZoneProgression::new();
        assert!(prog.mark_caught(0, "Carp"));
        assert!(!prog.mark_caught(0, "Carp"));
        assert!(prog.has_caught(0, "Carp"));
        assert!(!prog.has_caught(1, "Carp"));
        assert!(!prog.mark_caught(9, "Carp"));
    }

    #[test]
    fn test_zone_complete_needs_all_species() {
        let mut prog = ZoneProgression::new();
        prog.mark_caught(0, "Carp");
        prog.mark_caught(0, "Perch");
        prog.mark_caught(0, "Pike");
        assert_eq!(prog.species_caught(0), 3);
        assert!(!prog.is_zone_complete(0));

        prog.mark_caught(0, "Golden Carp");
        assert!(prog.is_zone_complete(0));
        assert_eq!(prog.zones_completed(), 1);
    }

    #[test]
    fn test_bonus_claimed_once() {
        let mut prog = ZoneProgression::new();
        assert!(!prog.claim_bonus(1), "Incomplete zone has no bonus");

        catch_all(&mut prog, 1);
        assert!(prog.claim_bonus(1));
        assert!(prog.is_bonus_awarded(1));
        assert!(!prog.claim_bonus(1));

        // Catching the last species again changes nothing
        prog.mark_caught(1, "Starry Sturgeon");
        assert!(!prog.claim_bonus(1));
    }

    #[test]
    fn test_invalid_zone_is_never_complete() {
        let mut prog = ZoneProgression::new();
        assert!(!prog.is_zone_complete(ZONE_COUNT));
        assert!(!prog.claim_bonus(ZONE_COUNT));
        assert_eq!(prog.species_caught(ZONE_COUNT), 0);
    }
}
