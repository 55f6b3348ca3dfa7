use super::{format_money, heading, styled_rarity};
use crate::core::constants::FISH_PER_ZONE;
use crate::core::game_state::GameState;
use crate::zones::get_all_zones;

/// Renders every zone's species. Species not yet caught are hidden.
pub fn render_collection(state: &GameState) -> String {
    let mut lines = vec![heading("Collection")];
    let progress = &state.zone_progression;

    for zone in get_all_zones() {
        let marker = if progress.is_bonus_awarded(zone.index) {
            " - complete, bonus paid"
        } else if progress.is_zone_complete(zone.index) {
            " - complete"
        } else {
            ""
        };
        lines.push(format!(
            "Zone {}: {} ({}/{}){}",
            zone.number(),
            zone.name,
            progress.species_caught(zone.index),
            FISH_PER_ZONE,
            marker
        ));

        for fish in zone.fish {
            if progress.has_caught(zone.index, fish.name) {
                lines.push(format!(
                    "  {:<16} [{}] x{} (base {})",
                    fish.name,
                    styled_rarity(fish.rarity),
                    state.caught_count(fish.name),
                    format_money(fish.base_value)
                ));
            } else {
                lines.push(format!("  {:<16} [{}]", "???", styled_rarity(fish.rarity)));
            }
        }
    }
    lines.join("\n")
}
