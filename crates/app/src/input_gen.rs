//! Bit message generation for runs without a message argument.
//!
//! Messages come from a seeded ChaCha8 RNG, so the same seed always yields
//! the same message.

use line_coding_core::{Bit, BitSequence, Result, MAX_BITS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a random bit message.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `len`: message length; `None` picks one uniformly in `1..=MAX_BITS`
///
/// # Errors
/// Returns `InputError::Empty` or `InputError::TooLong` if `len` is out of
/// range.
pub fn generate_message(seed: u64, len: Option<usize>) -> Result<BitSequence> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let len = len.unwrap_or_else(|| rng.gen_range(1..=MAX_BITS));

    let bits: Vec<Bit> = (0..len).map(|_| Bit::from(rng.gen::<bool>())).collect();

    tracing::debug!(seed, len, "generated bit message");

    BitSequence::new(bits)
}
