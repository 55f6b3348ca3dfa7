//! Zone progression integration tests
//!
//! Covers the unlock rules, travel pricing, and the one-time collection bonus
//! across all three zones.

use hooked::core::constants::{MAX_UPGRADE_LEVEL, ZONE_COUNT};
use hooked::equipment::UpgradeTrack;
use hooked::fishing::{fish_for, CaughtFish, FishRarity};
use hooked::zones::{get_all_zones, get_zone};
use hooked::{GameError, GameRules, GameState};

fn create_tycoon_state() -> GameState {
    GameState::new("Test Angler".to_string(), GameRules::tycoon())
}

/// Buys every level of both tracks in the current zone at rules prices.
fn buy_out_current_zone(state: &mut GameState) -> f64 {
    let mut spent = 0.0;
    for _ in 0..MAX_UPGRADE_LEVEL {
        for track in UpgradeTrack::all() {
            spent += state.attempt_upgrade(track).unwrap().cost;
        }
    }
    spent
}

fn land(state: &mut GameState, zone: usize, rarity: FishRarity) -> Option<f64> {
    let def = fish_for(zone, rarity).unwrap();
    state.record_catch(&CaughtFish {
        name: def.name,
        rarity,
        zone_index: zone,
        value: 0.0,
    })
}

#[test]
fn test_zone_table() {
    let zones = get_all_zones();
    assert_eq!(zones.len(), ZONE_COUNT);
    let names: Vec<&str> = zones.iter().map(|z| z.name).collect();
    assert_eq!(names, vec!["City Lakes", "River Delta", "Open Sea"]);
    for zone in zones {
        assert_eq!(zone.fish.len(), 4);
        assert!(zone.fish.iter().all(|f| f.zone_index == zone.index));
    }
    assert!(get_zone(ZONE_COUNT).is_none());
}

#[test]
fn test_full_climb_through_all_zones() {
    let mut state = create_tycoon_state();
    state.money = 100_000.0;

    // Zone 1: 100+200+300+400 for each track
    assert_eq!(buy_out_current_zone(&mut state), 2_000.0);
    assert!(!state.is_zone_unlocked(2));
    let receipt = state.travel_to_zone(1).unwrap();
    assert_eq!(receipt.cost, 1_000.0);

    // Zone 2 prices double
    assert_eq!(buy_out_current_zone(&mut state), 4_000.0);
    assert!(state.is_zone_unlocked(2));
    let receipt = state.travel_to_zone(2).unwrap();
    assert_eq!(receipt.cost, 3_000.0);

    assert_eq!(buy_out_current_zone(&mut state), 6_000.0);
    assert_eq!(state.money, 100_000.0 - 2_000.0 - 1_000.0 - 4_000.0 - 3_000.0 - 6_000.0);

    // Global stats: 12 rod levels and 12 bait levels
    assert_eq!(state.fail_chance(), 0.0);
    assert_eq!(state.bait_multiplier(), 7.0);
}

#[test]
fn test_returning_to_lower_zone_charges_its_price() {
    let mut state = create_tycoon_state();
    state.money = 10_000.0;
    buy_out_current_zone(&mut state);
    state.travel_to_zone(1).unwrap();

    let money = state.money;
    let receipt = state.travel_to_zone(0).unwrap();
    assert_eq!(receipt.cost, 0.0);
    assert_eq!(state.money, money);
    assert_eq!(state.current_zone(), 0);
}

#[test]
fn test_skipping_a_zone_is_locked() {
    let mut state = create_tycoon_state();
    state.money = 100_000.0;
    buy_out_current_zone(&mut state);

    assert_eq!(
        state.travel_to_zone(2),
        Err(GameError::ZoneLocked { zone: 2 })
    );
    assert_eq!(state.current_zone(), 0);
}

#[test]
fn test_upgrades_are_priced_per_zone() {
    let mut state = create_tycoon_state();
    state.money = 100_000.0;
    buy_out_current_zone(&mut state);
    state.travel_to_zone(1).unwrap();

    // Fresh tracks in the new zone, priced at 100 * 2 * (level + 1)
    assert_eq!(state.upgrade_level(UpgradeTrack::Rod), 0);
    assert_eq!(state.upgrade_cost(UpgradeTrack::Rod), Some(200.0));
    assert_eq!(state.upgrade_cost(UpgradeTrack::Bait), Some(200.0));
}

#[test]
fn test_each_zone_bonus_paid_exactly_once() {
    let mut state = create_tycoon_state();
    let mut paid = Vec::new();

    for zone in 0..ZONE_COUNT {
        for _ in 0..3 {
            for rarity in FishRarity::all() {
                if let Some(bonus) = land(&mut state, zone, rarity) {
                    paid.push((zone, bonus));
                }
            }
        }
    }

    assert_eq!(paid, vec![(0, 500.0), (1, 1_000.0), (2, 1_500.0)]);
    assert_eq!(state.money, 100.0 + 3_000.0);
    assert_eq!(state.zone_progression.zones_completed(), ZONE_COUNT);
}

#[test]
fn test_check_zone_completion_is_idempotent() {
    let mut state = create_tycoon_state();
    for rarity in FishRarity::all() {
        land(&mut state, 1, rarity);
    }
    assert!(state.zone_progression.is_bonus_awarded(1));
    assert_eq!(state.check_zone_completion(1), None);
    assert_eq!(state.check_zone_completion(0), None);
    assert_eq!(state.money, 1_100.0);
}

#[test]
fn test_incomplete_zone_pays_nothing() {
    let mut state = create_tycoon_state();
    land(&mut state, 0, FishRarity::Common);
    land(&mut state, 0, FishRarity::Rare);
    land(&mut state, 0, FishRarity::Epic);
    assert!(!state.is_zone_complete(0));
    assert_eq!(state.zone_progression.species_caught(0), 3);
    assert_eq!(state.check_zone_completion(0), None);
    assert_eq!(state.money, 100.0);
}

#[test]
fn test_classic_zones_are_open() {
    let state = GameState::new("Test Angler".to_string(), GameRules::classic());
    for zone in 0..ZONE_COUNT {
        assert!(state.is_zone_unlocked(zone));
    }
    assert!(!state.is_zone_unlocked(ZONE_COUNT));
}
