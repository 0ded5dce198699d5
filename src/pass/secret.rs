//! Generated secrets and their display metadata.

use std::fmt;

use zeroize::Zeroize;

use super::entropy;

/// A password or passphrase. The text is wiped when the value is dropped.
#[derive(Clone)]
pub struct GeneratedSecret {
    value: String,
    alphabet_size: Option<usize>,
    entropy_bits: Option<f64>,
}

impl GeneratedSecret {
    pub fn password(value: String, alphabet_size: usize) -> Self {
        let entropy_bits = entropy::bits(value.chars().count(), alphabet_size);
        Self {
            value,
            alphabet_size: Some(alphabet_size),
            entropy_bits: Some(entropy_bits),
        }
    }

    /// Passphrases carry no alphabet or entropy metadata.
    pub fn passphrase(value: String) -> Self {
        Self {
            value,
            alphabet_size: None,
            entropy_bits: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn alphabet_size(&self) -> Option<usize> {
        self.alphabet_size
    }

    pub fn entropy_bits(&self) -> Option<f64> {
        self.entropy_bits
    }
}

// Keep secrets out of logs and panic messages.
impl fmt::Debug for GeneratedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedSecret")
            .field("value", &"<redacted>")
            .field("alphabet_size", &self.alphabet_size)
            .field("entropy_bits", &self.entropy_bits)
            .finish()
    }
}

impl Drop for GeneratedSecret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
