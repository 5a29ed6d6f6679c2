//! Wallet creation and import flows.
//!
//! The adapter glues mnemonic handling, chain derivation, and the store
//! together: policy checks (password length, phrase validity) run first,
//! fail fast, and leave no partial state behind.

use kura::{ChainType, WalletKey};
use kura_btc::{BtcPrivateKey, Network};
use kura_eth::EthPrivateKey;
use kura_sol::Keypair;
use tracing::info;
use zeroize::Zeroizing;

use crate::derive::derive_key;
use crate::error::{Result, VaultError};
use crate::store::WalletStore;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Enforce the password policy. Runs before any derivation or
/// encryption work.
pub fn check_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(VaultError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// A freshly created wallet, returned once so the UI can show the
/// recovery phrase. The phrase is never persisted.
pub struct NewWallet {
    /// The BIP-39 recovery phrase (zeroized on drop).
    pub mnemonic: Zeroizing<String>,
    /// Derived address and private key.
    pub key: WalletKey,
}

impl std::fmt::Debug for NewWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewWallet")
            .field("address", &self.key.address)
            .field("mnemonic", &"[REDACTED]")
            .finish()
    }
}

/// Derive a wallet key from a recovery phrase.
///
/// The phrase is validated before any derivation is attempted.
pub fn import_from_phrase(phrase: &str, chain: ChainType) -> Result<WalletKey> {
    derive_key(chain, phrase.trim())
}

/// Decode a raw private key string per the chain's convention.
///
/// Solana accepts hex or Base58 and requires exactly 64 decoded bytes
/// whose halves form a consistent keypair; Ethereum accepts 32-byte hex
/// with an optional `0x` prefix; Bitcoin accepts WIF or 32-byte hex.
pub fn import_from_private_key(raw: &str, chain: ChainType) -> Result<WalletKey> {
    let raw = raw.trim();
    match chain {
        ChainType::Solana => {
            let keypair = Keypair::from_text(raw)
                .map_err(|_| VaultError::InvalidPrivateKeyFormat { chain })?;
            Ok(WalletKey {
                address: keypair.address(),
                private_key: keypair.to_secret_hex(),
            })
        }
        ChainType::Ethereum => {
            let key = EthPrivateKey::from_hex(raw)
                .map_err(|_| VaultError::InvalidPrivateKeyFormat { chain })?;
            Ok(WalletKey {
                address: key.address(),
                private_key: key.to_hex(),
            })
        }
        ChainType::Bitcoin => {
            let key: BtcPrivateKey = raw
                .parse()
                .map_err(|_| VaultError::InvalidPrivateKeyFormat { chain })?;
            Ok(WalletKey {
                address: key.address(Network::Mainnet),
                private_key: key.to_wif(Network::Mainnet),
            })
        }
    }
}

/// Create a brand-new wallet: generate a phrase, derive, encrypt, store.
///
/// Returns the phrase and key exactly once; the caller is responsible
/// for showing the phrase to the user before dropping it.
pub fn create_wallet(
    store: &mut WalletStore,
    chain: ChainType,
    password: &str,
    name: Option<&str>,
) -> Result<NewWallet> {
    check_password(password)?;

    let mnemonic = kura::mnemonic::generate().map_err(VaultError::derivation)?;
    let key = derive_key(chain, &mnemonic)?;
    store.save(&key.private_key, password, &key.address, chain, name)?;

    info!(%chain, address = %key.address, "wallet created");
    Ok(NewWallet { mnemonic, key })
}

/// Import a wallet from a recovery phrase and store it encrypted.
pub fn import_wallet(
    store: &mut WalletStore,
    chain: ChainType,
    phrase: &str,
    password: &str,
    name: Option<&str>,
) -> Result<WalletKey> {
    check_password(password)?;

    let key = import_from_phrase(phrase, chain)?;
    store.save(&key.private_key, password, &key.address, chain, name)?;

    info!(%chain, address = %key.address, "wallet imported from phrase");
    Ok(key)
}

/// Import a wallet from a raw private key and store it encrypted.
pub fn import_wallet_from_key(
    store: &mut WalletStore,
    chain: ChainType,
    raw_key: &str,
    password: &str,
    name: Option<&str>,
) -> Result<WalletKey> {
    check_password(password)?;

    let key = import_from_private_key(raw_key, chain)?;
    store.save(&key.private_key, password, &key.address, chain, name)?;

    info!(%chain, address = %key.address, "wallet imported from private key");
    Ok(key)
}
