//! Error types for Ethereum wallet operations.

use core::fmt;

/// Errors that can occur during Ethereum key operations.
#[derive(Debug)]
pub enum Error {
    /// Key derivation failed.
    #[cfg(feature = "alloc")]
    Derivation(alloc::string::String),
    /// Private key is not valid hex or has the wrong length.
    InvalidPrivateKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "alloc")]
            Self::Derivation(msg) => write!(f, "derivation error: {msg}"),
            Self::InvalidPrivateKey => write!(f, "invalid Ethereum private key"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
