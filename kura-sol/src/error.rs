//! Error types for Solana wallet operations.

use core::fmt;

/// Errors that can occur during Solana key operations.
#[derive(Debug)]
pub enum Error {
    /// Key derivation failed.
    #[cfg(feature = "alloc")]
    Derivation(alloc::string::String),
    /// Invalid seed length.
    InvalidSeedLength,
    /// Secret key is not a valid 64-byte Solana keypair.
    InvalidKeypair,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "alloc")]
            Self::Derivation(msg) => write!(f, "derivation error: {msg}"),
            Self::InvalidSeedLength => write!(f, "invalid seed length"),
            Self::InvalidKeypair => write!(f, "invalid Solana keypair"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
