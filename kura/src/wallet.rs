//! Unified wallet type for multi-chain key derivation.

use alloc::string::{String, ToString};

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::Error;

/// An HD wallet seed container shared by all chain derivers.
///
/// Holds a BIP-39 mnemonic and the 512-bit seed derived from it. The seed
/// is derived once at construction and handed by reference to the
/// chain-specific derivers (`kura-sol`, `kura-eth`, `kura-btc`); the same
/// mnemonic always reconstructs the same seed, which is how re-importing a
/// phrase recovers the same wallet.
///
/// An optional BIP-39 passphrase ("25th word") is supported; the same
/// mnemonic with a different passphrase is a completely different wallet.
pub struct Wallet {
    /// BIP-39 mnemonic phrase.
    mnemonic: Zeroizing<String>,
    /// Seed derived from mnemonic + passphrase.
    seed: Zeroizing<[u8; 64]>,
    /// Whether a passphrase was used.
    has_passphrase: bool,
}

impl Wallet {
    /// Generate a new wallet with a random mnemonic.
    ///
    /// # Arguments
    ///
    /// * `word_count` - Number of words (12 or 24)
    /// * `passphrase` - Optional BIP-39 passphrase
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] for word counts other than
    /// 12 or 24.
    #[cfg(feature = "rand")]
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self, Error> {
        if !crate::mnemonic::ACCEPTED_WORD_COUNTS.contains(&word_count) {
            return Err(Error::InvalidWordCount(word_count));
        }

        let mnemonic = Mnemonic::generate_in(bip39::Language::English, word_count)?;
        Self::from_mnemonic(mnemonic.to_string().as_str(), passphrase)
    }

    /// Create a wallet from an existing mnemonic phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mnemonic`] if the phrase fails wordlist or checksum
    /// validation, [`Error::InvalidWordCount`] if it is not 12 or 24 words.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> Result<Self, Error> {
        let mnemonic: Mnemonic = phrase.parse()?;
        if !crate::mnemonic::ACCEPTED_WORD_COUNTS.contains(&mnemonic.word_count()) {
            return Err(Error::InvalidWordCount(mnemonic.word_count()));
        }

        let passphrase_str = passphrase.unwrap_or("");
        let seed_bytes = mnemonic.to_seed(passphrase_str);

        Ok(Self {
            mnemonic: Zeroizing::new(mnemonic.to_string()),
            seed: Zeroizing::new(seed_bytes),
            has_passphrase: !passphrase_str.is_empty(),
        })
    }

    /// Get the mnemonic phrase.
    ///
    /// **Security warning**: this value can reconstruct all derived keys.
    /// Show it once for backup, never persist it in plaintext.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Get the seed bytes for key derivation.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &[u8; 64] {
        &self.seed
    }

    /// Check if a passphrase was used to derive the seed.
    #[must_use]
    pub const fn has_passphrase(&self) -> bool {
        self.has_passphrase
    }

    /// Get the word count of the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}

impl core::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wallet")
            .field("mnemonic", &"[REDACTED]")
            .field("seed", &"[REDACTED]")
            .field("has_passphrase", &self.has_passphrase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    /// BIP-39 seed for `TEST_MNEMONIC` with empty passphrase.
    const TEST_SEED_HEX: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[cfg(feature = "rand")]
    #[test]
    fn generate_12_words() {
        let wallet = Wallet::generate(12, None).unwrap();
        assert_eq!(wallet.word_count(), 12);
        assert!(!wallet.has_passphrase());
    }

    #[cfg(feature = "rand")]
    #[test]
    fn generate_24_words() {
        let wallet = Wallet::generate(24, None).unwrap();
        assert_eq!(wallet.word_count(), 24);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn generate_rejects_other_word_counts() {
        for count in [0, 6, 15, 18, 21, 48] {
            assert!(matches!(
                Wallet::generate(count, None),
                Err(Error::InvalidWordCount(_))
            ));
        }
    }

    #[test]
    fn seed_matches_bip39_test_vector() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        assert_eq!(hex::encode(wallet.seed()), TEST_SEED_HEX);
    }

    #[test]
    fn invalid_mnemonic_rejected() {
        let result = Wallet::from_mnemonic("not a real mnemonic phrase", None);
        assert!(matches!(result, Err(Error::Mnemonic(_))));
    }

    #[test]
    fn fifteen_word_phrase_rejected() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon address";
        assert!(matches!(
            Wallet::from_mnemonic(phrase, None),
            Err(Error::InvalidWordCount(15))
        ));
    }

    #[test]
    fn passphrase_changes_seed() {
        let plain = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let with_pass = Wallet::from_mnemonic(TEST_MNEMONIC, Some("password")).unwrap();
        assert_ne!(plain.seed(), with_pass.seed());
        assert!(with_pass.has_passphrase());
    }

    #[test]
    fn debug_redacts_mnemonic_and_seed() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let debug = alloc::format!("{wallet:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("abandon"));
        assert!(!debug.contains(&TEST_SEED_HEX[..16]));
    }

    #[test]
    fn deterministic_seed() {
        let a = Wallet::from_mnemonic(TEST_MNEMONIC, Some("test")).unwrap();
        let b = Wallet::from_mnemonic(TEST_MNEMONIC, Some("test")).unwrap();
        assert_eq!(a.seed(), b.seed());
    }
}
