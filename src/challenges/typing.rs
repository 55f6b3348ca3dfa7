//! Typing reaction gate.
//!
//! The player must type back a short random lowercase word before the deadline.
//! Input is blocking: the deadline is checked after the line arrives.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, warn};

use super::{GateOutcome, ReactionGate};
use crate::input::Console;

/// Random lowercase ASCII word of `length` letters.
pub fn generate_challenge_word(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

/// Judges an answer. Lateness is reported before a wrong answer.
pub fn evaluate_attempt(
    target: &str,
    typed: &str,
    elapsed: Duration,
    timeout: Duration,
) -> GateOutcome {
    if elapsed > timeout {
        GateOutcome::TooSlow
    } else if typed.trim() != target {
        GateOutcome::Mismatch
    } else {
        GateOutcome::Passed
    }
}

pub struct TypingChallenge<'a, R, W> {
    console: &'a mut Console<R, W>,
    length: usize,
    timeout: Duration,
}

impl<'a, R: BufRead, W: Write> TypingChallenge<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>, length: usize, timeout: Duration) -> Self {
        Self {
            console,
            length,
            timeout,
        }
    }
}

impl<R: BufRead, W: Write> ReactionGate for TypingChallenge<'_, R, W> {
    fn check(&mut self, rng: &mut impl Rng) -> GateOutcome {
        let target = generate_challenge_word(rng, self.length);
        let prompt = format!(
            "Something bites! Type '{}' within {:.0} seconds: ",
            target,
            self.timeout.as_secs_f64()
        );
        if let Err(e) = self.console.prompt(&prompt) {
            warn!(error = %e, "failed to show typing challenge");
            return GateOutcome::Mismatch;
        }

        let started = Instant::now();
        let typed = match self.console.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => String::new(),
            Err(e) => {
                warn!(error = %e, "failed to read typing challenge answer");
                String::new()
            }
        };
        let elapsed = started.elapsed();

        let outcome = evaluate_attempt(&target, &typed, elapsed, self.timeout);
        debug!(?outcome, elapsed_ms = elapsed.as_millis() as u64, "typing challenge");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    #[test]
    fn test_generate_word_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..100 {
            let word = generate_challenge_word(&mut rng, 5);
            assert_eq!(word.len(), 5);
            assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_evaluate_attempt() {
        let timeout = Duration::from_secs(3);
        let quick = Duration::from_millis(1200);
        let late = Duration::from_millis(3100);

        assert_eq!(
            evaluate_attempt("trout", "trout", quick, timeout),
            GateOutcome::Passed
        );
        assert_eq!(
            evaluate_attempt("trout", " trout ", quick, timeout),
            GateOutcome::Passed
        );
        assert_eq!(
            evaluate_attempt("trout", "trouts", quick, timeout),
            GateOutcome::Mismatch
        );
        assert_eq!(
            evaluate_attempt("trout", "TROUT", quick, timeout),
            GateOutcome::Mismatch
        );
        assert_eq!(
            evaluate_attempt("trout", "trout", late, timeout),
            GateOutcome::TooSlow
        );
        assert_eq!(
            evaluate_attempt("trout", "trout", timeout, timeout),
            GateOutcome::Passed
        );
    }

    #[test]
    fn test_gate_accepts_correct_answer() {
        // Same seed as the gate's rng, so the expected word is known up front
        let expected = generate_challenge_word(&mut ChaCha8Rng::seed_from_u64(7), 5);
        let mut console = Console::new(Cursor::new(format!("{}\n", expected)), Vec::new());

        let mut gate = TypingChallenge::new(&mut console, 5, Duration::from_secs(60));
        let outcome = gate.check(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(outcome, GateOutcome::Passed);

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.contains(&expected));
    }

    #[test]
    fn test_gate_reports_late_answer() {
        let expected = generate_challenge_word(&mut ChaCha8Rng::seed_from_u64(7), 5);
        let mut console = Console::new(Cursor::new(format!("{}\n", expected)), Vec::new());

        // Any measurable delay is past a zero deadline, even for the right word
        let mut gate = TypingChallenge::new(&mut console, 5, Duration::ZERO);
        let outcome = gate.check(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(outcome, GateOutcome::TooSlow);
    }

    #[test]
    fn test_gate_rejects_wrong_answer_and_eof() {
        let mut console = Console::new(Cursor::new("1234\n".to_string()), Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut gate = TypingChallenge::new(&mut console, 5, Duration::from_secs(60));
        assert_eq!(gate.check(&mut rng), GateOutcome::Mismatch);
        // Input exhausted
        assert_eq!(gate.check(&mut rng), GateOutcome::Mismatch);
    }
}
