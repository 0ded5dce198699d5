//! Password and passphrase generation.

pub mod charset;
pub mod entropy;
mod error;
mod generate;
mod secret;
pub mod words;

pub use error::EmptyPoolError;
pub use secret::GeneratedSecret;

use rand::{CryptoRng, RngCore};

use crate::csprng;
use crate::settings::{Mode, Settings};

/// Stateless generator over fixed word and ambiguous-character tables.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'t> {
    words: &'t [&'t str],
    ambiguous: &'t [char],
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Generator::new(words::WORD_LIST, charset::AMBIGUOUS)
    }
}

impl<'t> Generator<'t> {
    pub const fn new(words: &'t [&'t str], ambiguous: &'t [char]) -> Self {
        Self { words, ambiguous }
    }

    /// Generate one secret from the OS CSPRNG.
    pub fn generate(&self, settings: &Settings) -> Result<GeneratedSecret, EmptyPoolError> {
        self.generate_with(settings, &mut csprng::os())
    }

    pub fn generate_with<R: RngCore + CryptoRng>(
        &self,
        settings: &Settings,
        rng: &mut R,
    ) -> Result<GeneratedSecret, EmptyPoolError> {
        match settings.mode {
            Mode::Password => {
                let pools = charset::build(settings, self.ambiguous)?;
                let alphabet = charset::combine(&pools).len();
                let value = generate::password(settings.length, &pools, rng);
                Ok(GeneratedSecret::password(value, alphabet))
            }
            Mode::Passphrase => {
                if self.words.is_empty() {
                    return Err(EmptyPoolError::Words);
                }
                let value =
                    generate::passphrase(settings.words, &settings.separator, self.words, rng);
                Ok(GeneratedSecret::passphrase(value))
            }
        }
    }

    /// Generate `settings.count` secrets. The first failure aborts the batch.
    pub fn generate_batch(
        &self,
        settings: &Settings,
    ) -> Result<Vec<GeneratedSecret>, EmptyPoolError> {
        match settings.mode {
            Mode::Password => log::debug!(
                "generating {} secret(s) in {} mode, alphabet {:?}",
                settings.count,
                settings.mode,
                self.alphabet_size(settings).ok()
            ),
            Mode::Passphrase => log::debug!(
                "generating {} secret(s) in {} mode, vocabulary {}",
                settings.count,
                settings.mode,
                self.words.len()
            ),
        }
        (0..settings.count)
            .map(|_| self.generate(settings))
            .collect()
    }

    /// Combined alphabet size for character passwords.
    pub fn alphabet_size(&self, settings: &Settings) -> Result<usize, EmptyPoolError> {
        charset::size(settings, self.ambiguous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::CharClass;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn password_settings(length: usize) -> Settings {
        Settings {
            mode: Mode::Password,
            length,
            upper: true,
            digits: true,
            symbols: false,
            avoid_ambiguous: false,
            ..Settings::default()
        }
    }

    #[test]
    fn password_secret_reports_alphabet_and_entropy() {
        let secret = Generator::default()
            .generate(&password_settings(12))
            .unwrap();
        assert_eq!(secret.char_count(), 12);
        assert!(secret.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(secret.alphabet_size(), Some(62));
        let bits = secret.entropy_bits().unwrap();
        assert!((bits - 71.4).abs() < 0.1, "{bits}");
    }

    #[test]
    fn passphrase_secret_has_no_entropy() {
        let settings = Settings {
            mode: Mode::Passphrase,
            words: 4,
            separator: "-".to_string(),
            ..Settings::default()
        };
        let secret = Generator::default().generate(&settings).unwrap();
        assert_eq!(secret.as_str().split('-').count(), 4);
        assert_eq!(secret.alphabet_size(), None);
        assert_eq!(secret.entropy_bits(), None);
    }

    #[test]
    fn injected_word_list_is_used() {
        let words = ["alpha", "beta"];
        let generator = Generator::new(&words, charset::AMBIGUOUS);
        let settings = Settings {
            mode: Mode::Passphrase,
            words: 8,
            separator: " ".to_string(),
            ..Settings::default()
        };
        let secret = generator.generate(&settings).unwrap();
        assert!(
            secret
                .as_str()
                .split(' ')
                .all(|w| w == "alpha" || w == "beta")
        );
    }

    #[test]
    fn empty_pool_aborts_request() {
        let ambiguous: Vec<char> = ('0'..='9').collect();
        let generator = Generator::new(words::WORD_LIST, &ambiguous);
        let settings = Settings {
            avoid_ambiguous: true,
            ..password_settings(12)
        };
        let err = generator.generate(&settings).unwrap_err();
        assert_eq!(err, EmptyPoolError::Class(CharClass::Digit));
        assert!(generator.generate_batch(&settings).is_err());
        assert!(generator.alphabet_size(&settings).is_err());
    }

    #[test]
    fn empty_pool_ignored_in_passphrase_mode() {
        let ambiguous: Vec<char> = ('0'..='9').collect();
        let generator = Generator::new(words::WORD_LIST, &ambiguous);
        let settings = Settings {
            mode: Mode::Passphrase,
            digits: true,
            avoid_ambiguous: true,
            ..Settings::default()
        };
        assert!(generator.generate(&settings).is_ok());
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let generator = Generator::new(&[], charset::AMBIGUOUS);
        let settings = Settings {
            mode: Mode::Passphrase,
            words: 4,
            ..Settings::default()
        };
        assert_eq!(
            generator.generate(&settings).unwrap_err(),
            EmptyPoolError::Words
        );
        assert!(generator.generate_batch(&settings).is_err());
        assert_eq!(EmptyPoolError::Words.to_string(), "word list is empty");
    }

    #[test]
    fn empty_word_list_ignored_in_password_mode() {
        let generator = Generator::new(&[], charset::AMBIGUOUS);
        let secret = generator.generate(&Settings::default()).unwrap();
        assert_eq!(secret.char_count(), 12);
    }

    #[test]
    fn batch_honours_count() {
        let settings = Settings {
            count: 7,
            ..password_settings(20)
        };
        let batch = Generator::default().generate_batch(&settings).unwrap();
        assert_eq!(batch.len(), 7);
        assert!(batch.iter().all(|s| s.char_count() == 20));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let settings = password_settings(24);
        let generator = Generator::default();
        let a = generator
            .generate_with(&settings, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = generator
            .generate_with(&settings, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn alphabet_size_matches_generated_secret() {
        let settings = Settings {
            symbols: true,
            avoid_ambiguous: true,
            ..password_settings(16)
        };
        let generator = Generator::default();
        let secret = generator.generate(&settings).unwrap();
        assert_eq!(generator.alphabet_size(&settings), Ok(82));
        assert_eq!(secret.alphabet_size(), Some(82));
    }
}
