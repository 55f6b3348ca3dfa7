use super::{format_money, heading};
use crate::core::constants::{MAX_UPGRADE_LEVEL, ZONE_COUNT};
use crate::core::game_state::GameState;
use crate::equipment::UpgradeTrack;

/// Renders the status screen: money, zone, equipment for the current zone
pub fn render_status(state: &GameState) -> String {
    let zone = state.current_zone();
    let mut lines = vec![
        heading("Status"),
        format!("Angler:       {}", state.player_name),
        format!("Money:        {}", format_money(state.money)),
        format!("Zone:         {} ({}/{})", state.zone_name(), zone + 1, ZONE_COUNT),
        format!(
            "Rod level:    {}/{} (fail chance {}%)",
            state.upgrade_level(UpgradeTrack::Rod),
            MAX_UPGRADE_LEVEL,
            state.equipment.fail_chance_percent(zone)
        ),
        format!(
            "Bait level:   {}/{} (multiplier x{:.1})",
            state.upgrade_level(UpgradeTrack::Bait),
            MAX_UPGRADE_LEVEL,
            state.bait_multiplier()
        ),
    ];

    for track in UpgradeTrack::all() {
        let next = state
            .upgrade_cost(track)
            .map(format_money)
            .unwrap_or_else(|| "maxed".to_string());
        lines.push(format!("Next {:<5}    {}", format!("{}:", track), next));
    }

    lines.push(format!(
        "Fish caught:  {} in {} casts",
        state.total_fish_caught(),
        state.total_casts
    ));
    lines.push(format!(
        "Collections:  {}/{} complete",
        state.zone_progression.zones_completed(),
        ZONE_COUNT
    ));
    lines.push(format!("Rules:        {}", state.rules.variant));
    lines.join("\n")
}
