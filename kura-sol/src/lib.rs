//! Solana key derivation for Kura.
//!
//! Derives Solana addresses from a unified [`kura::Wallet`] seed using
//! SLIP-0010 Ed25519 derivation at `m/44'/501'/account'/change'`, and
//! provides the 64-byte Solana keypair encoding used by standard wallet
//! software for raw-key import and export.
//!
//! # Usage
//!
//! ```
//! use kura::Wallet;
//! use kura_sol::Deriver;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! ).unwrap();
//!
//! let addr = Deriver::new(&wallet).derive(0).unwrap();
//! assert_eq!(addr.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod deriver;
mod error;
#[cfg(feature = "alloc")]
mod keypair;
#[cfg(feature = "alloc")]
mod slip10;

#[cfg(feature = "alloc")]
pub use deriver::{DerivedAddress, Deriver};
pub use error::Error;
#[cfg(feature = "alloc")]
pub use keypair::Keypair;
