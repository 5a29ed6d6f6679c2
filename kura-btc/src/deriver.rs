//! Bitcoin address derivation from an HD wallet.

use alloc::format;
use alloc::string::{String, ToString};

use bip32::{DerivationPath, XPrv};
use kura::Wallet;
use zeroize::Zeroizing;

use crate::private_key::BtcPrivateKey;
use crate::{Error, Network};

/// A derived Bitcoin address with its key material.
pub struct DerivedAddress {
    /// Derivation path used (e.g. `m/44'/0'/0'/0/0`).
    pub path: String,
    /// Private key in WIF, compressed (zeroized on drop).
    pub wif: Zeroizing<String>,
    /// P2PKH address.
    pub address: String,
}

/// Derives Bitcoin addresses from a unified wallet seed.
#[derive(Debug)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
    network: Network,
}

impl<'a> Deriver<'a> {
    /// Create a mainnet deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self::with_network(wallet, Network::Mainnet)
    }

    /// Create a deriver targeting a specific network.
    #[must_use]
    pub const fn with_network(wallet: &'a Wallet, network: Network) -> Self {
        Self { wallet, network }
    }

    /// Derive the address at the standard path `m/44'/0'/0'/0/index`.
    #[inline]
    pub fn derive(&self, index: u32) -> Result<DerivedAddress, Error> {
        self.derive_at_path(&format!("m/44'/0'/0'/0/{index}"))
    }

    /// Derive the address at a custom derivation path.
    pub fn derive_at_path(&self, path: &str) -> Result<DerivedAddress, Error> {
        let derivation_path: DerivationPath = path
            .parse()
            .map_err(|e| Error::Derivation(format!("invalid derivation path: {e}")))?;

        let derived = XPrv::derive_from_path(self.wallet.seed(), &derivation_path)
            .map_err(|e| Error::Derivation(format!("key derivation failed: {e}")))?;

        let key = BtcPrivateKey::from_bytes(&derived.private_key().to_bytes())?;

        Ok(DerivedAddress {
            path: path.to_string(),
            wif: key.to_wif(self.network),
            address: key.address(self.network),
        })
    }
}
