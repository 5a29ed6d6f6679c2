//! SLIP-0010 Ed25519 key derivation.
//!
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//!
//! Ed25519 supports hardened derivation only, and the derived value at
//! each step is exactly 32 bytes. Those 32 bytes are used directly as the
//! Ed25519 seed; using the 64-byte expanded secret key instead would
//! produce addresses that no standard Solana wallet can recover.

use alloc::string::String;
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE_KEY: &[u8] = b"ed25519 seed";

/// SLIP-0010 derived key with its chain code.
pub struct DerivedKey {
    /// 32-byte private key (the Ed25519 seed).
    pub private_key: Zeroizing<[u8; 32]>,
    /// 32-byte chain code.
    pub chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// Derive the master key from a BIP-39 seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let mut mac = HmacSha512::new_from_slice(ED25519_CURVE_KEY)
            .map_err(|_| Error::InvalidSeedLength)?;
        mac.update(seed);
        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Derive the child key at a hardened index.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, Error> {
        let hardened = index | 0x8000_0000;

        let mut mac = HmacSha512::new_from_slice(&*self.chain_code)
            .map_err(|_| Error::InvalidSeedLength)?;
        // Hardened derivation data: 0x00 || private_key || index
        mac.update(&[0x00]);
        mac.update(&*self.private_key);
        mac.update(&hardened.to_be_bytes());

        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Walk the Solana BIP-44 path `m/44'/501'/account'/change'`.
    ///
    /// All four levels are hardened, as SLIP-0010 Ed25519 requires.
    pub fn derive_solana_path(seed: &[u8], account: u32, change: u32) -> Result<Self, Error> {
        Self::from_seed(seed)?
            .derive_hardened(44)?
            .derive_hardened(501)?
            .derive_hardened(account)?
            .derive_hardened(change)
    }

    /// Use the derived 32 bytes as an Ed25519 seed.
    pub fn to_signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.private_key)
    }

    /// Format the derivation path string.
    pub fn format_path(account: u32, change: u32) -> String {
        alloc::format!("m/44'/501'/{account}'/{change}'")
    }

    fn split(bytes: &[u8]) -> Self {
        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        private_key.copy_from_slice(&bytes[..32]);
        chain_code.copy_from_slice(&bytes[32..]);
        Self {
            private_key,
            chain_code,
        }
    }
}
