//! Ethereum address derivation from an HD wallet.

use alloc::format;
use alloc::string::{String, ToString};

use bip32::{DerivationPath, XPrv};
use kura::Wallet;
use zeroize::Zeroizing;

use crate::address::{public_key_to_address, to_checksum_address};
use crate::Error;

/// A derived Ethereum address with its key material.
pub struct DerivedAddress {
    /// Derivation path used (e.g. `m/44'/60'/0'/0/0`).
    pub path: String,
    /// Private key as `0x`-prefixed hex (zeroized on drop).
    pub private_key_hex: Zeroizing<String>,
    /// EIP-55 checksummed address.
    pub address: String,
}

/// Derives Ethereum addresses from a unified wallet seed.
#[derive(Debug)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a new Ethereum deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the address at the standard path `m/44'/60'/0'/0/index`.
    ///
    /// Index 0 is the account MetaMask-compatible wallets show first.
    #[inline]
    pub fn derive(&self, index: u32) -> Result<DerivedAddress, Error> {
        self.derive_at_path(&format!("m/44'/60'/0'/0/{index}"))
    }

    /// Derive the address at a custom derivation path.
    pub fn derive_at_path(&self, path: &str) -> Result<DerivedAddress, Error> {
        let derivation_path: DerivationPath = path
            .parse()
            .map_err(|e| Error::Derivation(format!("invalid derivation path: {e}")))?;

        let derived = XPrv::derive_from_path(self.wallet.seed(), &derivation_path)
            .map_err(|e| Error::Derivation(format!("key derivation failed: {e}")))?;
        let private_key = derived.private_key();

        let public_key = private_key.verifying_key().to_encoded_point(false);
        let address = public_key_to_address(public_key.as_bytes());

        Ok(DerivedAddress {
            path: path.to_string(),
            private_key_hex: Zeroizing::new(format!(
                "0x{}",
                hex::encode(private_key.to_bytes())
            )),
            address: to_checksum_address(&address),
        })
    }
}
