//! Passphrase vocabulary.

/// Common words passphrases are drawn from.
pub const WORD_LIST: &[&str] = &[
    "apple", "river", "mountain", "sunset", "guitar", "coffee", "pencil", "flower", "ocean",
    "forest", "moon", "star", "school", "rocket", "butter", "bridge", "winter", "summer",
    "garden", "island", "stone", "bird", "cloud", "planet", "music", "silent", "bright", "image",
    "friend", "wonder",
];
