//! The interactive menu loop.
//!
//! Generic over the console's reader and writer so whole sessions can be
//! scripted in tests.

use std::io::{self, BufRead, Write};

use rand::Rng;
use tracing::debug;

use crate::challenges::{NoGate, TypingChallenge};
use crate::core::constants::ZONE_COUNT;
use crate::core::game_state::GameState;
use crate::equipment::UpgradeTrack;
use crate::fishing::{go_fishing, CatchOutcome};
use crate::input::Console;
use crate::ui;

pub const DEFAULT_PLAYER_NAME: &str = "Angler";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Fish,
    Upgrade,
    Travel,
    Status,
    Collection,
    Quit,
}

impl MenuAction {
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(MenuAction::Fish),
            2 => Some(MenuAction::Upgrade),
            3 => Some(MenuAction::Travel),
            4 => Some(MenuAction::Status),
            5 => Some(MenuAction::Collection),
            0 => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

/// Asks for the player's name, falling back to a default on empty input.
pub fn read_player_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
    console.prompt("What's your name, angler? ")?;
    let name = console
        .read_line()?
        .map(|line| line.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
    Ok(name)
}

/// Runs menu turns until the player quits or input ends.
pub fn run_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut GameState,
    rng: &mut impl Rng,
) -> io::Result<()> {
    console.say(&ui::welcome(state))?;

    loop {
        console.say(&ui::main_menu())?;
        let Some(choice) = console.read_choice("Choose an option: ", 0..=5)? else {
            break;
        };
        let Some(action) = MenuAction::from_choice(choice) else {
            continue;
        };
        debug!(?action, "menu action");

        match action {
            MenuAction::Fish => {
                fish_turn(console, state, rng)?;
            }
            MenuAction::Upgrade => upgrade_turn(console, state)?,
            MenuAction::Travel => travel_turn(console, state)?,
            MenuAction::Status => console.say(&ui::render_status(state))?,
            MenuAction::Collection => console.say(&ui::render_collection(state))?,
            MenuAction::Quit => break,
        }
    }

    console.say(ui::farewell())
}

fn fish_turn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut GameState,
    rng: &mut impl Rng,
) -> io::Result<CatchOutcome> {
    console.say("You cast your line...")?;
    let outcome = if state.rules.typing_challenge {
        let length = state.rules.typing_length;
        let timeout = state.rules.typing_timeout();
        let mut gate = TypingChallenge::new(console, length, timeout);
        go_fishing(state, rng, &mut gate)
    } else {
        go_fishing(state, rng, &mut NoGate)
    };
    console.say(&ui::describe_catch(&outcome))?;
    Ok(outcome)
}

fn upgrade_turn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut GameState,
) -> io::Result<()> {
    console.say(&ui::upgrade_menu(state))?;
    let track = match console.read_choice("Buy which upgrade? ", 0..=2)? {
        Some(1) => UpgradeTrack::Rod,
        Some(2) => UpgradeTrack::Bait,
        _ => return Ok(()),
    };
    let result = state.attempt_upgrade(track);
    console.say(&ui::describe_upgrade(&result))
}

fn travel_turn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut GameState,
) -> io::Result<()> {
    console.say(&ui::travel_menu(state))?;
    let target = match console.read_choice("Travel where? ", 0..=ZONE_COUNT as u32)? {
        Some(choice) if choice > 0 => choice as usize - 1,
        _ => return Ok(()),
    };
    let result = state.travel_to_zone(target);
    console.say(&ui::describe_travel(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenges::generate_challenge_word;
    use crate::core::config::GameRules;
    use crate::core::rng::roll_unit;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn play(script: &str, rules: GameRules) -> (GameState, String) {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let mut state = GameState::new("Tester".to_string(), rules);
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        run_game(&mut console, &mut state, &mut rng).unwrap();
        let output = String::from_utf8(console.into_writer()).unwrap();
        (state, output)
    }

    #[test]
    fn test_menu_action_mapping() {
        assert_eq!(MenuAction::from_choice(1), Some(MenuAction::Fish));
        assert_eq!(MenuAction::from_choice(0), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_choice(6), None);
    }

    #[test]
    fn test_quit_immediately() {
        let (state, output) = play("0\n", GameRules::tycoon());
        assert!(output.contains("Welcome to Hooked, Tester!"));
        assert!(output.contains(ui::farewell()));
        assert_eq!(state.total_casts, 0);
    }

    #[test]
    fn test_eof_quits() {
        let (_, output) = play("", GameRules::tycoon());
        assert!(output.contains(ui::farewell()));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (_, output) = play("fish\n42\n0\n", GameRules::tycoon());
        assert_eq!(output.matches(crate::input::INVALID_CHOICE_MESSAGE).count(), 2);
    }

    #[test]
    fn test_buy_rod_upgrade_through_menu() {
        let (state, output) = play("2\n1\n0\n", GameRules::tycoon());
        assert_eq!(state.money, 0.0);
        assert_eq!(state.upgrade_level(UpgradeTrack::Rod), 1);
        assert!(output.contains("Rod upgraded to level 1 for $100.00."));
    }

    #[test]
    fn test_upgrade_without_money_reports_failure() {
        let (state, output) = play("2\n1\n0\n", GameRules::classic());
        // Classic: $50 start, first upgrade costs $50
        assert_eq!(state.money, 0.0);
        assert!(output.contains("Rod upgraded"));

        let (state, output) = play("2\n1\n2\n1\n0\n", GameRules::classic());
        assert_eq!(state.upgrade_level(UpgradeTrack::Rod), 1);
        assert!(output.contains("Upgrade failed: not enough money"));
    }

    #[test]
    fn test_travel_locked_zone_through_menu() {
        let (state, output) = play("3\n2\n0\n", GameRules::tycoon());
        assert_eq!(state.current_zone(), 0);
        assert!(output.contains("Travel failed: zone 2 is locked"));
    }

    #[test]
    fn test_travel_back_option() {
        let (state, _) = play("3\n0\n0\n", GameRules::classic());
        assert_eq!(state.current_zone(), 0);
    }

    #[test]
    fn test_fishing_turns() {
        let (state, output) = play("1\n1\n1\n1\n1\n0\n", GameRules::tycoon());
        assert_eq!(state.total_casts, 5);
        assert_eq!(output.matches("You cast your line...").count(), 5);
    }

    #[test]
    fn test_status_and_collection_screens() {
        let (_, output) = play("4\n5\n0\n", GameRules::tycoon());
        assert!(output.contains("Money:        $100.00"));
        assert!(output.contains("Zone 3: Open Sea (0/4)"));
    }

    /// Replays the session's draws on a copy of the seed: appends "1" for
    /// every cast up to and including the next one that hooks a fish, and
    /// returns the word the typing gate will ask for on that cast.
    fn script_until_bite(predictor: &mut ChaCha8Rng, script: &mut String) -> String {
        let fail_chance = GameState::new("Tester".to_string(), GameRules::reflex()).fail_chance();
        loop {
            script.push_str("1\n");
            if roll_unit(predictor) > fail_chance {
                return generate_challenge_word(predictor, GameRules::reflex().typing_length);
            }
        }
    }

    #[test]
    fn test_reflex_session_passes_and_fails_gate() {
        let mut predictor = ChaCha8Rng::seed_from_u64(12345);
        let mut script = String::new();

        let word = script_until_bite(&mut predictor, &mut script);
        script.push_str(&format!("{}\n", word));
        // Rarity roll after the passed gate
        roll_unit(&mut predictor);

        script_until_bite(&mut predictor, &mut script);
        script.push_str("12345\n");
        script.push_str("0\n");

        let (state, output) = play(&script, GameRules::reflex());
        assert_eq!(output.matches("Something bites!").count(), 2);
        assert_eq!(output.matches("You caught a").count(), 1);
        assert_eq!(output.matches("Fumbled it!").count(), 1);
        assert_eq!(state.total_fish_caught(), 1);
        assert!(state.money > 100.0);
        assert!(output.contains(ui::farewell()));
    }

    #[test]
    fn test_reflex_session_eof_at_gate_quits() {
        let mut predictor = ChaCha8Rng::seed_from_u64(12345);
        let mut script = String::new();
        script_until_bite(&mut predictor, &mut script);

        let (state, output) = play(&script, GameRules::reflex());
        assert!(output.contains("Fumbled it!"));
        assert_eq!(state.total_fish_caught(), 0);
        assert_eq!(state.money, 100.0);
        assert!(output.contains(ui::farewell()));
    }

    #[test]
    fn test_out_of_range_timeout_does_not_crash_session() {
        let mut rules = GameRules::reflex();
        rules.typing_timeout_secs = 1e30;
        let (state, output) = play("1\n0\n", rules);
        assert_eq!(state.total_casts, 1);
        assert!(output.contains(ui::farewell()));
    }

    #[test]
    fn test_read_player_name() {
        let mut console = Console::new(Cursor::new("  Mara \n".to_string()), Vec::new());
        assert_eq!(read_player_name(&mut console).unwrap(), "Mara");

        let mut console = Console::new(Cursor::new("\n".to_string()), Vec::new());
        assert_eq!(read_player_name(&mut console).unwrap(), DEFAULT_PLAYER_NAME);

        let mut console = Console::new(Cursor::new(String::new()), Vec::new());
        assert_eq!(read_player_name(&mut console).unwrap(), DEFAULT_PLAYER_NAME);
    }
}
