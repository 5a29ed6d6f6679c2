//! Chain enumeration and derived key material.

#[cfg(feature = "alloc")]
use alloc::string::String;
use core::fmt;

#[cfg(feature = "alloc")]
use zeroize::Zeroizing;

#[cfg(feature = "alloc")]
use crate::Error;

/// Supported blockchain networks.
///
/// A closed enumeration: every dispatch over chains is an exhaustive
/// `match`, so adding a chain is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    /// Solana (Ed25519, SLIP-0010 derivation).
    Solana,
    /// Ethereum (secp256k1, BIP-32 derivation).
    Ethereum,
    /// Bitcoin (secp256k1, BIP-32 derivation).
    Bitcoin,
}

impl ChainType {
    /// All supported chains, in display order.
    pub const ALL: [Self; 3] = [Self::Solana, Self::Ethereum, Self::Bitcoin];

    /// Canonical upper-case name, used as the storage key form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solana => "SOLANA",
            Self::Ethereum => "ETHEREUM",
            Self::Bitcoin => "BITCOIN",
        }
    }

    /// BIP-44 coin type index (`m/44'/coin'/...`).
    #[must_use]
    pub const fn coin_type(self) -> u32 {
        match self {
            Self::Solana => 501,
            Self::Ethereum => 60,
            Self::Bitcoin => 0,
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "alloc")]
impl core::str::FromStr for ChainType {
    type Err = Error;

    /// Parse a chain name case-insensitively.
    ///
    /// UI selectors send lower-case or mixed-case names; storage uses the
    /// canonical upper-case form. Both map to the same variant.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.eq_ignore_ascii_case("solana") {
            Ok(Self::Solana)
        } else if s.eq_ignore_ascii_case("ethereum") {
            Ok(Self::Ethereum)
        } else if s.eq_ignore_ascii_case("bitcoin") {
            Ok(Self::Bitcoin)
        } else {
            Err(Error::UnknownChain(String::from(s)))
        }
    }
}

/// A derived chain-specific keypair.
///
/// `address` is the chain's public identifier; `private_key` is the raw
/// key material in the chain's native text encoding (hex for Solana's
/// 64-byte secret key, `0x`-hex for Ethereum, WIF for Bitcoin).
#[cfg(feature = "alloc")]
#[derive(Clone)]
pub struct WalletKey {
    /// Public address.
    pub address: String,
    /// Private key in chain-native text encoding (zeroized on drop).
    pub private_key: Zeroizing<String>,
}

#[cfg(feature = "alloc")]
impl fmt::Debug for WalletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletKey")
            .field("address", &self.address)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
