//! Simulation runner: an automated player driving the real game logic.
//!
//! The bot uses the same `GameState` operations and `go_fishing` the console
//! does; only the reaction gate is replaced by one that always passes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::config::SimConfig;
use super::report::SimReport;
use crate::challenges::NoGate;
use crate::core::config::GameRules;
use crate::core::constants::ZONE_COUNT;
use crate::core::game_state::GameState;
use crate::equipment::UpgradeTrack;
use crate::fishing::{go_fishing, CatchOutcome};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let rules = GameRules::for_variant(config.variant);
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(&rules, config.max_actions_per_run, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} in {} actions, zone {}, ${:.2}, {} upgrades",
                run_idx + 1,
                config.num_runs,
                if run_stats.completed {
                    "completed"
                } else {
                    "timed out"
                },
                run_stats.actions,
                run_stats.final_zone + 1,
                run_stats.final_money,
                run_stats.upgrades_bought
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(config.variant, all_runs, config.max_actions_per_run)
}

/// Statistics for one simulated session.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Every zone's collection was completed
    pub completed: bool,
    pub actions: u64,
    pub final_money: f64,
    pub final_zone: usize,
    /// Action number at which each zone was first entered
    pub zone_reached_at: [Option<u64>; ZONE_COUNT],
    pub catches_by_rarity: [u64; 4],
    pub escapes: u64,
    pub upgrades_bought: u32,
    pub bonuses_paid: f64,
}

/// What the automated player does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Upgrade(UpgradeTrack),
    Travel(usize),
    Fish,
}

/// Greedy strategy: buy the cheapest affordable upgrade, move on once the
/// current zone's collection is complete, otherwise fish.
pub fn choose_action(state: &GameState) -> BotAction {
    let cheapest = UpgradeTrack::all()
        .into_iter()
        .filter_map(|track| state.upgrade_cost(track).map(|cost| (track, cost)))
        .min_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((track, cost)) = cheapest {
        if state.money >= cost {
            return BotAction::Upgrade(track);
        }
    }

    let zone = state.current_zone();
    let next = zone + 1;
    if state.is_zone_complete(zone) && state.is_zone_unlocked(next) {
        let cost = state.rules.travel_cost(next).unwrap_or(f64::INFINITY);
        if state.money >= cost {
            return BotAction::Travel(next);
        }
    }

    BotAction::Fish
}

/// Plays one session until every collection is complete or actions run out.
pub fn simulate_single_run(rules: &GameRules, max_actions: u64, rng: &mut impl Rng) -> RunStats {
    let mut state = GameState::new("Simulated Angler".to_string(), rules.clone());
    let mut stats = RunStats::default();
    stats.zone_reached_at[0] = Some(0);

    for action_idx in 1..=max_actions {
        stats.actions = action_idx;

        match choose_action(&state) {
            BotAction::Upgrade(track) => {
                if state.attempt_upgrade(track).is_ok() {
                    stats.upgrades_bought += 1;
                }
            }
            BotAction::Travel(zone) => {
                if state.travel_to_zone(zone).is_ok() {
                    stats.zone_reached_at[zone].get_or_insert(action_idx);
                }
            }
            BotAction::Fish => match go_fishing(&mut state, rng, &mut NoGate) {
                CatchOutcome::Escaped => stats.escapes += 1,
                CatchOutcome::GateFailed(_) => {}
                CatchOutcome::Caught {
                    fish,
                    completion_bonus,
                } => {
                    stats.catches_by_rarity[fish.rarity.index()] += 1;
                    stats.bonuses_paid += completion_bonus.unwrap_or(0.0);
                }
            },
        }

        if state.zone_progression.zones_completed() == ZONE_COUNT {
            stats.completed = true;
            break;
        }
    }

    stats.final_money = state.money;
    stats.final_zone = state.current_zone();
    debug!(
        completed = stats.completed,
        actions = stats.actions,
        "simulated run finished"
    );
    stats
}
