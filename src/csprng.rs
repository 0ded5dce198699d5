//! Cryptographically secure random selection.
//!
//! Every random draw in the crate goes through this module. The helpers take
//! any `RngCore + CryptoRng`, so a general-purpose PRNG cannot be passed in by
//! mistake. Production code uses the operating system generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};

/// The operating system CSPRNG (`getrandom` on Linux).
#[inline]
pub fn os() -> OsRng {
    OsRng
}

pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}

/// Uniform choice of one element, `None` only when `items` is empty.
#[inline]
pub fn choose<T: Copy, R: RngCore + CryptoRng>(items: &[T], rng: &mut R) -> Option<T> {
    items.choose(rng).copied()
}

/// Uniform in-place shuffle.
#[inline]
pub fn shuffle<T, R: RngCore + CryptoRng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
