//! Password-based credential encryption.
//!
//! Private keys at rest are sealed with AES-256-GCM under a key derived
//! from the user's password with Argon2id. The output is a single
//! printable Base58 blob that embeds everything needed to decrypt it
//! again: `version || salt(16) || nonce(12) || ciphertext+tag`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{Result, VaultError};

/// Blob layout version. Bump when the KDF or cipher parameters change.
const VERSION: u8 = 1;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Minimum structurally valid blob: header plus the tag of an empty
/// plaintext.
const MIN_BLOB_LEN: usize = 1 + SALT_LEN + NONCE_LEN + TAG_LEN;

// Argon2id parameters per the OWASP minimum recommendation (19 MiB,
// 2 iterations, 1 lane).
const ARGON2_MEMORY_KIB: u32 = 19 * 1024;
const ARGON2_ITERATIONS: u32 = 2;
const ARGON2_LANES: u32 = 1;

fn derive_cipher_key(password: &str, salt: &[u8]) -> Result<Zeroizing<[u8; 32]>> {
    let params = Params::new(ARGON2_MEMORY_KIB, ARGON2_ITERATIONS, ARGON2_LANES, Some(32))
        .map_err(|e| VaultError::derivation(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = Zeroizing::new([0u8; 32]);
    argon2
        .hash_password_into(password.as_bytes(), salt, key.as_mut())
        .map_err(|e| VaultError::derivation(e.to_string()))?;
    Ok(key)
}

/// Encrypt a private key under a password.
///
/// Salt and nonce are freshly drawn from the OS random source on every
/// call, so encrypting the same plaintext twice yields different blobs.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut nonce);

    let key = derive_cipher_key(password, &salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_ref())
        .map_err(|e| VaultError::derivation(e.to_string()))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|e| VaultError::derivation(e.to_string()))?;

    let mut blob = Vec::with_capacity(1 + SALT_LEN + NONCE_LEN + ciphertext.len());
    blob.push(VERSION);
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    Ok(bs58::encode(blob).into_string())
}

/// Decrypt a blob produced by [`encrypt`].
///
/// Structural defects (bad Base58, truncation, unknown version) surface
/// as [`VaultError::CorruptCiphertext`]; an authentication-tag failure or
/// non-UTF-8 plaintext is [`VaultError::IncorrectPassword`], so the UI
/// can tell "wrong password" apart from "data corrupted".
pub fn decrypt(blob: &str, password: &str) -> Result<Zeroizing<String>> {
    let decoded = bs58::decode(blob)
        .into_vec()
        .map_err(|_| VaultError::CorruptCiphertext)?;

    if decoded.len() < MIN_BLOB_LEN {
        return Err(VaultError::CorruptCiphertext);
    }
    if decoded[0] != VERSION {
        return Err(VaultError::CorruptCiphertext);
    }

    let salt = &decoded[1..1 + SALT_LEN];
    let nonce = &decoded[1 + SALT_LEN..1 + SALT_LEN + NONCE_LEN];
    let ciphertext = &decoded[1 + SALT_LEN + NONCE_LEN..];

    let key = derive_cipher_key(password, salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_ref())
        .map_err(|e| VaultError::derivation(e.to_string()))?;

    let plaintext = Zeroizing::new(
        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| VaultError::IncorrectPassword)?,
    );

    let text = core::str::from_utf8(&plaintext).map_err(|_| VaultError::IncorrectPassword)?;
    if text.is_empty() {
        return Err(VaultError::IncorrectPassword);
    }
    Ok(Zeroizing::new(text.to_owned()))
}
