//! Reaction gates: optional checks between a successful catch roll and the
//! reward.

pub mod typing;

use rand::Rng;

pub use typing::{evaluate_attempt, generate_challenge_word, TypingChallenge};

/// Result of a reaction gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Passed,
    /// The answer did not match.
    Mismatch,
    /// The answer came in after the deadline.
    TooSlow,
}

impl GateOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, GateOutcome::Passed)
    }
}

/// A pass/fail check consulted after the catch roll succeeds.
pub trait ReactionGate {
    fn check(&mut self, rng: &mut impl Rng) -> GateOutcome;
}

/// Gate that always passes, used when the rules disable the reaction check
/// and by the simulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGate;

impl ReactionGate for NoGate {
    fn check(&mut self, _rng: &mut impl Rng) -> GateOutcome {
        GateOutcome::Passed
    }
}
