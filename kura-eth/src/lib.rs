//! Ethereum key derivation for Kura.
//!
//! Derives Ethereum addresses from a unified [`kura::Wallet`] seed using
//! BIP-32 over secp256k1 at `m/44'/60'/account'/0/index`, with EIP-55
//! checksummed address formatting, and parses raw private keys for import.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod address;
#[cfg(feature = "alloc")]
mod deriver;
mod error;
#[cfg(feature = "alloc")]
mod private_key;

#[cfg(feature = "alloc")]
pub use address::{public_key_to_address, to_checksum_address};
#[cfg(feature = "alloc")]
pub use deriver::{DerivedAddress, Deriver};
pub use error::Error;
#[cfg(feature = "alloc")]
pub use private_key::EthPrivateKey;
