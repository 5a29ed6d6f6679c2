//! # Kura Vault - Encrypted Local Wallet Store
//!
//! The stateful half of Kura: password-based credential encryption, a
//! file-backed wallet store, and the create/import flows that tie the
//! chain derivation crates together.
//!
//! Typical flow:
//!
//! ```no_run
//! use kura::ChainType;
//! use kura_vault::{create_wallet, WalletStore};
//!
//! # fn main() -> kura_vault::Result<()> {
//! let mut store = WalletStore::open("vault.json")?;
//! let new = create_wallet(&mut store, ChainType::Solana, "Passw0rd!", None)?;
//! println!("back up this phrase: {}", &*new.mnemonic);
//!
//! let unlocked = store.get_wallets("Passw0rd!", ChainType::Solana, None, None)?;
//! assert_eq!(unlocked[0].public_key, new.key.address);
//! # Ok(())
//! # }
//! ```
//!
//! Private keys only exist in plaintext inside [`zeroize::Zeroizing`]
//! buffers; at rest they are Argon2id + AES-256-GCM blobs.

#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::uninlined_format_args
)]
#![forbid(unsafe_code)]

pub mod cipher;
mod derive;
mod error;
mod import;
mod password_cache;
mod store;

pub use derive::{derive_from_wallet, derive_key, parse_chain};
pub use error::{Result, VaultError};
pub use import::{
    check_password, create_wallet, import_from_phrase, import_from_private_key, import_wallet,
    import_wallet_from_key, NewWallet, MIN_PASSWORD_LEN,
};
pub use password_cache::{PasswordCache, DEFAULT_TTL};
pub use store::{CancelToken, UnlockedWallet, WalletStore, WalletSummary};
