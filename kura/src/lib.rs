//! # Kura - Multi-Chain Wallet Key Core
//!
//! Core types and cryptographic primitives for building non-custodial
//! multi-chain cryptocurrency wallets.
//!
//! This crate provides the chain-agnostic pieces: BIP-39 mnemonic handling,
//! the unified [`Wallet`] seed container, the [`ChainType`] enumeration, and
//! the hash functions shared by the chain-specific derivation crates
//! (`kura-sol`, `kura-eth`, `kura-btc`).
//!
//! ## Features
//!
//! - **no_std compatible**: works in embedded and WASM environments
//! - **Secure by design**: secrets held in [`zeroize::Zeroizing`] buffers
//! - **Closed chain enumeration**: adding a chain is a compile-checked
//!   exhaustive-match change, never a silent string fallthrough

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::uninlined_format_args
)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod hash;
#[cfg(feature = "alloc")]
pub mod mnemonic;
pub mod types;
#[cfg(feature = "alloc")]
mod wallet;

pub use error::{Error, Result};
pub use types::{ChainType, WalletKey};
#[cfg(feature = "alloc")]
pub use wallet::Wallet;
