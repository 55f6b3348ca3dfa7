//! Hooked - a text-menu fishing tycoon.
//!
//! This module exposes the game rules and logic for testing, the interactive
//! binary, and the balance simulator.

pub mod challenges;
pub mod core;
pub mod equipment;
pub mod fishing;
pub mod game_loop;
pub mod input;
pub mod simulator;
pub mod ui;
pub mod zones;

pub use crate::core::{ConfigFile, GameError, GameRules, GameState, Variant};
