//! Random source for a game session.
//!
//! Every operation that draws takes the generator as `&mut impl Rng`; nothing
//! holds a process-wide engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Entropy-seeded generator, or a reproducible one when `seed` is given.
pub fn session_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Uniform draw in `[0, 1)`.
pub fn roll_unit(rng: &mut impl Rng) -> f64 {
    rng.gen::<f64>()
}
