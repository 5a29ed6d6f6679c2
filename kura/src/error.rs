//! Error types for core wallet operations.

#[cfg(feature = "alloc")]
use alloc::string::String;
use core::fmt;

/// Result alias for core wallet operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during core wallet operations.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid mnemonic phrase.
    Mnemonic(bip39::Error),
    /// Invalid word count for mnemonic.
    InvalidWordCount(usize),
    /// Chain name does not match any supported chain.
    #[cfg(feature = "alloc")]
    UnknownChain(String),
    /// Input has the wrong length.
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
    /// Input is not valid hex or Base58.
    InvalidEncoding,
    /// Base58Check checksum mismatch.
    InvalidChecksum,
    /// Private key bytes are not a valid key for the curve.
    InvalidPrivateKey,
    /// Key derivation failed.
    #[cfg(feature = "alloc")]
    Derivation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mnemonic(e) => write!(f, "mnemonic error: {e}"),
            Self::InvalidWordCount(n) => {
                write!(f, "invalid word count {n}, must be 12 or 24")
            }
            #[cfg(feature = "alloc")]
            Self::UnknownChain(name) => write!(f, "unknown chain \"{name}\""),
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} bytes, got {actual}")
            }
            Self::InvalidEncoding => write!(f, "invalid encoding"),
            Self::InvalidChecksum => write!(f, "checksum mismatch"),
            Self::InvalidPrivateKey => write!(f, "invalid private key"),
            #[cfg(feature = "alloc")]
            Self::Derivation(msg) => write!(f, "derivation error: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mnemonic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::Mnemonic(err)
    }
}
