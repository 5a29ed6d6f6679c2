//! Error types for the encrypted wallet store.

use kura::ChainType;

/// Result alias for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Errors surfaced by the vault: derivation dispatch, the credential
/// cipher, and the wallet store.
///
/// Messages never contain passwords or key material.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum VaultError {
    /// Phrase fails BIP-39 wordlist or checksum validation.
    #[error("invalid mnemonic phrase")]
    InvalidMnemonic,

    /// Chain name does not map to a supported chain.
    #[error("unsupported chain \"{0}\"")]
    UnsupportedChain(String),

    /// Cryptographic failure during key derivation.
    #[error("key derivation failed")]
    KeyDerivation {
        /// Underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Raw private key import failed decoding or a length check.
    #[error("invalid private key format for {chain}")]
    InvalidPrivateKeyFormat {
        /// Chain whose key convention failed to parse.
        chain: ChainType,
    },

    /// Decryption produced no valid plaintext; almost always a wrong
    /// password.
    #[error("incorrect password")]
    IncorrectPassword,

    /// Ciphertext blob is structurally invalid (encoding, length, or
    /// version), independent of the password.
    #[error("corrupt ciphertext")]
    CorruptCiphertext,

    /// A wallet with the same (chain, public key) already exists.
    #[error("wallet already exists for {chain} with public key {public_key}")]
    DuplicateWallet {
        /// Chain of the existing record.
        chain: ChainType,
        /// Public key of the existing record.
        public_key: String,
    },

    /// Password shorter than the minimum policy length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// A required field was missing or empty.
    #[error("missing required parameter: {field}")]
    MissingParameter {
        /// Name of the absent field.
        field: &'static str,
    },

    /// Underlying persistence fault; not retried internally.
    #[error("storage error: {0}")]
    Storage(String),
}

impl VaultError {
    /// Wrap an underlying cryptographic failure.
    pub fn derivation(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::KeyDerivation {
            source: source.into(),
        }
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
