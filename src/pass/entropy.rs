//! Entropy estimate for uniformly drawn strings.

/// `length * log2(alphabet_size)` bits, or zero for an alphabet of one or
/// fewer characters.
pub fn bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size <= 1 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}
