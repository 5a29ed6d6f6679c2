//! BIP-39 mnemonic generation and validation.
//!
//! Thin wrappers over the `bip39` crate that fix the policy pieces: the
//! English wordlist, 12-word phrases for new wallets (24 accepted on
//! import), and silent boolean validation for callers that gate on it.

use alloc::string::{String, ToString};

use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use crate::Error;

/// Word counts accepted for wallet creation and import.
pub const ACCEPTED_WORD_COUNTS: [usize; 2] = [12, 24];

/// Generate a fresh 12-word mnemonic (128 bits of entropy).
///
/// Entropy comes from the operating system CSPRNG.
///
/// # Errors
///
/// Returns an error only if entropy collection fails.
#[cfg(feature = "rand")]
pub fn generate() -> Result<Zeroizing<String>, Error> {
    let mnemonic = Mnemonic::generate_in(Language::English, 12)?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Check wordlist membership and checksum validity of a phrase.
///
/// Fails silently (returns `false`); callers that require a valid phrase
/// raise their own error on a `false` result.
#[must_use]
pub fn validate(phrase: &str) -> bool {
    match Mnemonic::parse_in(Language::English, phrase) {
        Ok(m) => ACCEPTED_WORD_COUNTS.contains(&m.word_count()),
        Err(_) => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const VALID_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const VALID_24: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    #[cfg(feature = "rand")]
    #[test]
    fn generated_phrase_validates() {
        let phrase = generate().unwrap();
        assert_eq!(phrase.split_whitespace().count(), 12);
        assert!(validate(&phrase));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn generated_phrases_are_unique() {
        let a = generate().unwrap();
        let b = generate().unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn known_phrases_validate() {
        assert!(validate(VALID_12));
        assert!(validate(VALID_24));
    }

    #[test]
    fn word_outside_wordlist_rejected() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon zebra123";
        assert!(!validate(phrase));
    }

    #[test]
    fn bad_checksum_rejected() {
        // All words valid, checksum word wrong ("abandon" x12 fails checksum).
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(!validate(phrase));
    }

    #[test]
    fn empty_phrase_rejected() {
        assert!(!validate(""));
    }

    #[test]
    fn fifteen_words_rejected() {
        // Valid BIP-39 phrase, but outside the accepted 12/24 policy.
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon address";
        assert!(!validate(phrase));
    }
}
