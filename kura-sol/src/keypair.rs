//! The 64-byte Solana keypair encoding.
//!
//! Solana wallet software exports secret keys as 64 bytes: the 32-byte
//! Ed25519 seed followed by the 32-byte public key. Import accepts hex or
//! Base58 text and rejects any input whose halves are inconsistent.

use alloc::string::String;
use alloc::vec::Vec;

use ed25519_dalek::{SigningKey, VerifyingKey};
use zeroize::Zeroizing;

use crate::Error;

/// A Solana Ed25519 keypair.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Create a keypair from a 32-byte Ed25519 seed.
    #[must_use]
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Create a keypair from the 64-byte secret key encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeypair`] if the input is not 64 bytes or
    /// if the embedded public key does not match the seed half.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 64 {
            return Err(Error::InvalidKeypair);
        }

        let mut seed = Zeroizing::new([0u8; 32]);
        seed.copy_from_slice(&bytes[..32]);
        let signing_key = SigningKey::from_bytes(&seed);

        let mut claimed = [0u8; 32];
        claimed.copy_from_slice(&bytes[32..]);
        let claimed_key =
            VerifyingKey::from_bytes(&claimed).map_err(|_| Error::InvalidKeypair)?;
        if signing_key.verifying_key() != claimed_key {
            return Err(Error::InvalidKeypair);
        }

        Ok(Self { signing_key })
    }

    /// Parse a secret key from hex or Base58 text.
    ///
    /// Both encodings are in circulation: hex from this wallet's own
    /// export, Base58 from Phantom-style exports.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let text = text.trim();
        let bytes: Zeroizing<Vec<u8>> = if let Ok(decoded) = hex::decode(text) {
            Zeroizing::new(decoded)
        } else {
            Zeroizing::new(
                bs58::decode(text)
                    .into_vec()
                    .map_err(|_| Error::InvalidKeypair)?,
            )
        };
        Self::from_secret_bytes(&bytes)
    }

    /// The Base58-encoded public key, which is the Solana address.
    #[must_use]
    pub fn address(&self) -> String {
        bs58::encode(self.signing_key.verifying_key().as_bytes()).into_string()
    }

    /// The 64-byte secret key (seed || public key), zeroized on drop.
    #[must_use]
    pub fn to_secret_bytes(&self) -> Zeroizing<[u8; 64]> {
        let mut out = Zeroizing::new([0u8; 64]);
        out[..32].copy_from_slice(self.signing_key.as_bytes());
        out[32..].copy_from_slice(self.signing_key.verifying_key().as_bytes());
        out
    }

    /// The 64-byte secret key as lowercase hex, zeroized on drop.
    #[must_use]
    pub fn to_secret_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.to_secret_bytes()))
    }
}

impl core::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_roundtrip_through_secret_bytes() {
        let keypair = Keypair::from_seed(&[3u8; 32]);
        let bytes = keypair.to_secret_bytes();
        let restored = Keypair::from_secret_bytes(&*bytes).unwrap();
        assert_eq!(keypair.address(), restored.address());
    }

    #[test]
    fn hex_and_base58_parse_to_same_keypair() {
        let keypair = Keypair::from_seed(&[9u8; 32]);
        let bytes = keypair.to_secret_bytes();

        let from_hex = Keypair::from_text(&hex::encode(&*bytes)).unwrap();
        let from_b58 = Keypair::from_text(&bs58::encode(&*bytes).into_string()).unwrap();
        assert_eq!(from_hex.address(), keypair.address());
        assert_eq!(from_b58.address(), keypair.address());
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(matches!(
            Keypair::from_secret_bytes(&[0u8; 32]),
            Err(Error::InvalidKeypair)
        ));
        assert!(matches!(
            Keypair::from_secret_bytes(&[0u8; 63]),
            Err(Error::InvalidKeypair)
        ));
    }

    #[test]
    fn mismatched_public_half_rejected() {
        let mut bytes = *Keypair::from_seed(&[5u8; 32]).to_secret_bytes();
        // Corrupt the public-key half.
        bytes[40] ^= 0x01;
        assert!(Keypair::from_secret_bytes(&bytes).is_err());
    }

    #[test]
    fn garbage_text_rejected() {
        assert!(Keypair::from_text("not a key").is_err());
        assert!(Keypair::from_text("").is_err());
    }

    #[test]
    fn debug_shows_address_only() {
        let keypair = Keypair::from_seed(&[1u8; 32]);
        let debug = alloc::format!("{keypair:?}");
        assert!(debug.contains(&keypair.address()));
        assert!(!debug.contains(&*keypair.to_secret_hex()));
    }
}
