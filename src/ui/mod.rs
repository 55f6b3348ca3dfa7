//! Console text for the interactive game.
//!
//! Everything here builds plain strings (with ANSI styling) so the screens can
//! be checked in tests without a terminal.

pub mod collection_panel;
pub mod stats_panel;

use crossterm::style::{Color, StyledContent, Stylize};

use crate::challenges::GateOutcome;
use crate::core::constants::MAX_UPGRADE_LEVEL;
use crate::core::error::GameError;
use crate::core::game_state::{GameState, TravelReceipt, UpgradeReceipt};
use crate::equipment::UpgradeTrack;
use crate::fishing::{CatchOutcome, FishRarity};
use crate::zones::{get_all_zones, get_zone};

pub use collection_panel::render_collection;
pub use stats_panel::render_status;

fn rarity_color(rarity: FishRarity) -> Color {
    match rarity {
        FishRarity::Common => Color::Grey,
        FishRarity::Rare => Color::Yellow,
        FishRarity::Epic => Color::Magenta,
        FishRarity::Legendary => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
    }
}

pub fn styled_rarity(rarity: FishRarity) -> StyledContent<&'static str> {
    rarity.name().with(rarity_color(rarity))
}

pub fn heading(title: &str) -> String {
    format!("=== {} ===", title).bold().cyan().to_string()
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn welcome(state: &GameState) -> String {
    format!(
        "Welcome to Hooked, {}! You start with {} in zone 1: {}.",
        state.player_name,
        format_money(state.money),
        state.zone_name()
    )
}

pub fn main_menu() -> String {
    [
        String::new(),
        heading("Hooked: Fishing Tycoon"),
        "1. Fish".to_string(),
        "2. Upgrade equipment".to_string(),
        "3. Travel".to_string(),
        "4. View status".to_string(),
        "5. View collection".to_string(),
        "0. Quit".to_string(),
    ]
    .join("\n")
}

fn upgrade_line(state: &GameState, number: usize, track: UpgradeTrack) -> String {
    let level = state.upgrade_level(track);
    match state.upgrade_cost(track) {
        Some(cost) => format!(
            "{}. {} (level {}/{}) - {}",
            number,
            track,
            level,
            MAX_UPGRADE_LEVEL,
            format_money(cost)
        ),
        None => format!(
            "{}. {} (level {}/{}) - maxed",
            number, track, level, MAX_UPGRADE_LEVEL
        ),
    }
}

pub fn upgrade_menu(state: &GameState) -> String {
    let mut lines = vec![
        heading(&format!("Tackle shop: {}", state.zone_name())),
        format!("Money: {}", format_money(state.money)),
    ];
    for (i, track) in UpgradeTrack::all().into_iter().enumerate() {
        lines.push(upgrade_line(state, i + 1, track));
    }
    lines.push("0. Back".to_string());
    lines.join("\n")
}

pub fn travel_menu(state: &GameState) -> String {
    let mut lines = vec![heading("Travel")];
    for zone in get_all_zones() {
        let status = if zone.index == state.current_zone() {
            "you are here".to_string()
        } else if !state.is_zone_unlocked(zone.index) {
            "locked".to_string()
        } else {
            let cost = state.rules.travel_cost(zone.index).unwrap_or(0.0);
            if cost > 0.0 {
                format_money(cost)
            } else {
                "free".to_string()
            }
        };
        lines.push(format!("{}. {} ({})", zone.number(), zone.name, status));
    }
    if state.rules.zone_gating {
        lines.push("Max out rod and bait in a zone to unlock the next one.".to_string());
    }
    lines.push("0. Back".to_string());
    lines.join("\n")
}

pub fn describe_catch(outcome: &CatchOutcome) -> String {
    match outcome {
        CatchOutcome::Escaped => "Bad luck! The fish got away.".to_string(),
        CatchOutcome::GateFailed(GateOutcome::TooSlow) => {
            "Too slow! The fish slipped the hook.".to_string()
        }
        CatchOutcome::GateFailed(_) => "Fumbled it! The fish slipped the hook.".to_string(),
        CatchOutcome::Caught {
            fish,
            completion_bonus,
        } => {
            let mut text = format!(
                "You caught a {} [{}] worth {}!",
                fish.name,
                styled_rarity(fish.rarity),
                format_money(fish.value)
            );
            if let Some(bonus) = completion_bonus {
                let zone_name = get_zone(fish.zone_index).map(|z| z.name).unwrap_or("zone");
                text.push_str(&format!(
                    "\nCollection complete for {}! Bonus: {}",
                    zone_name,
                    format_money(*bonus)
                ));
            }
            text
        }
    }
}

pub fn describe_upgrade(result: &Result<UpgradeReceipt, GameError>) -> String {
    match result {
        Ok(receipt) => format!(
            "{} upgraded to level {} for {}.",
            receipt.track,
            receipt.new_level,
            format_money(receipt.cost)
        ),
        Err(e) => format!("Upgrade failed: {}.", e),
    }
}

pub fn describe_travel(result: &Result<TravelReceipt, GameError>) -> String {
    match result {
        Ok(receipt) if receipt.from == receipt.to => "You are already here.".to_string(),
        Ok(receipt) => {
            let name = get_zone(receipt.to).map(|z| z.name).unwrap_or("Unknown");
            format!(
                "You travelled to zone {}: {} ({}).",
                receipt.to + 1,
                name,
                format_money(receipt.cost)
            )
        }
        Err(e) => format!("Travel failed: {}.", e),
    }
}

pub fn farewell() -> &'static str {
    "Thanks for playing Hooked! Tight lines!"
}
