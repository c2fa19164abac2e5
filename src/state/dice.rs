//! Dice rolling.
//!
//! Produces a player's private hand. Fairness is the only requirement here;
//! the RNG is injected so callers can use a thread RNG in production and a
//! seeded RNG in tests.

use rand::Rng;

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Dice dealt to each player when a room is created without an explicit size.
pub const DEFAULT_HAND_SIZE: u8 = 5;

/// Roll `n` dice, each an independent uniform draw over `1..=DIE_FACES`.
pub fn roll<R: Rng>(rng: &mut R, n: u8) -> Vec<u8> {
    (0..n).map(|_| rng.gen_range(1..=DIE_FACES)).collect()
}
