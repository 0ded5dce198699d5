//! Password and passphrase construction.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::charset::{self, Pool};
use crate::csprng;

/// Build a password of exactly `length` characters from `pools`.
///
/// One character is drawn from every pool first so each enabled class is
/// represented. When `length` is shorter than the number of pools, only the
/// first `length` of those picks survive. The rest is filled uniformly from
/// the combined alphabet and the whole sequence is shuffled.
///
/// `pools` must be non-empty, which `charset::build` guarantees.
pub fn password<R: RngCore + CryptoRng>(length: usize, pools: &[Pool], rng: &mut R) -> String {
    let mut chars: Vec<char> = pools
        .iter()
        .filter_map(|pool| csprng::choose(&pool.chars, rng))
        .collect();

    if length < chars.len() {
        chars.truncate(length);
    } else {
        let alphabet = charset::combine(pools);
        let fill = length - chars.len();
        chars.extend((0..fill).filter_map(|_| csprng::choose(&alphabet, rng)));
    }

    csprng::shuffle(&mut chars, rng);
    let out: String = chars.iter().collect();
    chars.zeroize();
    out
}

/// `count` words drawn with replacement from `words`, joined by `separator`.
pub fn passphrase<R: RngCore + CryptoRng>(
    count: usize,
    separator: &str,
    words: &[&str],
    rng: &mut R,
) -> String {
    let picked: Vec<&str> = (0..count)
        .filter_map(|_| csprng::choose(words, rng))
        .collect();
    picked.join(separator)
}
