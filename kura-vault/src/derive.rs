//! Chain dispatch for key derivation.

use kura::{ChainType, Wallet, WalletKey};

use crate::error::{Result, VaultError};

/// Map a UI-supplied chain name to a [`ChainType`], case-insensitively.
pub fn parse_chain(name: &str) -> Result<ChainType> {
    name.trim()
        .parse()
        .map_err(|_| VaultError::UnsupportedChain(name.trim().to_owned()))
}

/// Derive the first account's key for `chain` from a mnemonic phrase.
///
/// Validates the phrase before any cryptographic work, then walks the
/// chain's canonical path: `m/44'/501'/0'/0'` for Solana (SLIP-0010,
/// ed25519), `m/44'/60'/0'/0/0` for Ethereum, `m/44'/0'/0'/0/0` for
/// Bitcoin. Deterministic: the same (chain, phrase) always yields the
/// same key, which is what makes phrase re-import recover a wallet.
pub fn derive_key(chain: ChainType, mnemonic: &str) -> Result<WalletKey> {
    if !kura::mnemonic::validate(mnemonic) {
        return Err(VaultError::InvalidMnemonic);
    }
    let wallet = Wallet::from_mnemonic(mnemonic, None).map_err(VaultError::derivation)?;
    derive_from_wallet(chain, &wallet)
}

/// Derive the first account's key for `chain` from an existing wallet.
pub fn derive_from_wallet(chain: ChainType, wallet: &Wallet) -> Result<WalletKey> {
    match chain {
        ChainType::Solana => {
            let derived = kura_sol::Deriver::new(wallet)
                .derive(0)
                .map_err(VaultError::derivation)?;
            Ok(WalletKey {
                address: derived.address,
                private_key: derived.secret_key_hex,
            })
        }
        ChainType::Ethereum => {
            let derived = kura_eth::Deriver::new(wallet)
                .derive(0)
                .map_err(VaultError::derivation)?;
            Ok(WalletKey {
                address: derived.address,
                private_key: derived.private_key_hex,
            })
        }
        ChainType::Bitcoin => {
            let derived = kura_btc::Deriver::new(wallet)
                .derive(0)
                .map_err(VaultError::derivation)?;
            Ok(WalletKey {
                address: derived.address,
                private_key: derived.wif,
            })
        }
    }
}
