//! Bitcoin key derivation for Kura.
//!
//! Derives Bitcoin P2PKH addresses from a unified [`kura::Wallet`] seed
//! using BIP-32 over secp256k1 at `m/44'/0'/account'/0/index`, and encodes
//! private keys as WIF (Wallet Import Format).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod address;
#[cfg(feature = "alloc")]
mod deriver;
mod network;
#[cfg(feature = "alloc")]
mod private_key;

#[cfg(feature = "alloc")]
pub use address::p2pkh_address;
#[cfg(feature = "alloc")]
pub use deriver::{DerivedAddress, Deriver};
pub use network::Network;
#[cfg(feature = "alloc")]
pub use private_key::BtcPrivateKey;

pub use kura::Error;
