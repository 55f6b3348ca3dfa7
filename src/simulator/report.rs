//! Simulation report generation.

use serde::Serialize;

use super::runner::RunStats;
use crate::core::config::Variant;
use crate::core::constants::ZONE_COUNT;
use crate::fishing::FishRarity;
use crate::zones::get_all_zones;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub variant: Variant,
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,
    pub completion_rate: f64,

    // Aggregated stats
    pub avg_actions_to_complete: f64,
    pub avg_final_money: f64,
    pub avg_upgrades_bought: f64,
    pub avg_bonuses_paid: f64,
    pub avg_escapes: f64,

    // Per-zone analysis
    /// Share of runs that entered each zone
    pub zone_reach_rate: Vec<f64>,
    /// Average action number at which each zone was entered, over runs that did
    pub avg_action_zone_reached: Vec<f64>,

    // Catch analysis
    pub avg_catches_by_rarity: Vec<f64>,
    /// Observed share of each tier among all catches
    pub rarity_share: Vec<f64>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average<I: Iterator<Item = f64>>(values: I, count: usize) -> f64 {
    values.sum::<f64>() / count.max(1) as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(variant: Variant, runs: Vec<RunStats>, max_actions: u64) -> Self {
        let n = runs.len();
        let runs_completed = runs.iter().filter(|r| r.completed).count();
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.completed && r.actions >= max_actions)
            .count();

        let avg_actions_to_complete = average(
            runs.iter().filter(|r| r.completed).map(|r| r.actions as f64),
            runs_completed,
        );
        let avg_final_money = average(runs.iter().map(|r| r.final_money), n);
        let avg_upgrades_bought = average(runs.iter().map(|r| r.upgrades_bought as f64), n);
        let avg_bonuses_paid = average(runs.iter().map(|r| r.bonuses_paid), n);
        let avg_escapes = average(runs.iter().map(|r| r.escapes as f64), n);

        let mut zone_reach_rate = Vec::with_capacity(ZONE_COUNT);
        let mut avg_action_zone_reached = Vec::with_capacity(ZONE_COUNT);
        for zone in 0..ZONE_COUNT {
            let reached: Vec<u64> = runs.iter().filter_map(|r| r.zone_reached_at[zone]).collect();
            zone_reach_rate.push(reached.len() as f64 / n.max(1) as f64);
            avg_action_zone_reached.push(average(
                reached.iter().map(|&a| a as f64),
                reached.len(),
            ));
        }

        let avg_catches_by_rarity: Vec<f64> = FishRarity::all()
            .iter()
            .map(|r| average(runs.iter().map(|run| run.catches_by_rarity[r.index()] as f64), n))
            .collect();
        let total_catches: f64 = avg_catches_by_rarity.iter().sum();
        let rarity_share = avg_catches_by_rarity
            .iter()
            .map(|c| if total_catches > 0.0 { c / total_catches } else { 0.0 })
            .collect();

        Self {
            variant,
            num_runs: n as u32,
            runs_completed: runs_completed as u32,
            runs_timed_out: runs_timed_out as u32,
            completion_rate: runs_completed as f64 / n.max(1) as f64 * 100.0,
            avg_actions_to_complete,
            avg_final_money,
            avg_upgrades_bought,
            avg_bonuses_paid,
            avg_escapes,
            zone_reach_rate,
            avg_action_zone_reached,
            avg_catches_by_rarity,
            rarity_share,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str(&format!(
            "                    (rules: {})\n",
            self.variant
        ));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} timed out ({:.1}% completion)\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out, self.completion_rate
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Actions to Finish:  {:.0}\n",
            self.avg_actions_to_complete
        ));
        report.push_str(&format!(
            "  Avg Final Money:        ${:.2}\n",
            self.avg_final_money
        ));
        report.push_str(&format!(
            "  Avg Upgrades Bought:    {:.1}\n",
            self.avg_upgrades_bought
        ));
        report.push_str(&format!(
            "  Avg Bonuses Paid:       ${:.2}\n",
            self.avg_bonuses_paid
        ));
        report.push_str(&format!(
            "  Avg Escapes:            {:.1}\n\n",
            self.avg_escapes
        ));

        report.push_str("── ZONES ────────────────────────────────────────────────────────\n");
        for zone in get_all_zones() {
            report.push_str(&format!(
                "  {:<12} reached by {:>5.1}% of runs, avg at action {:.0}\n",
                zone.name,
                self.zone_reach_rate[zone.index] * 100.0,
                self.avg_action_zone_reached[zone.index]
            ));
        }
        report.push('\n');

        report.push_str("── CATCHES ──────────────────────────────────────────────────────\n");
        for rarity in FishRarity::all() {
            report.push_str(&format!(
                "  {:<10} avg {:>7.1} per run, {:>5.1}% of catches (target {:.0}%)\n",
                rarity.name(),
                self.avg_catches_by_rarity[rarity.index()],
                self.rarity_share[rarity.index()] * 100.0,
                rarity.chance() * 100.0
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
