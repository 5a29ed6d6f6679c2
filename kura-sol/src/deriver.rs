//! Solana address derivation from an HD wallet.

use alloc::string::String;

use kura::Wallet;
use zeroize::Zeroizing;

use crate::keypair::Keypair;
use crate::slip10::DerivedKey;
use crate::Error;

/// A derived Solana address with its keypair encoding.
pub struct DerivedAddress {
    /// Derivation path used (e.g. `m/44'/501'/0'/0'`).
    pub path: String,
    /// 64-byte secret key in hex (zeroized on drop).
    pub secret_key_hex: Zeroizing<String>,
    /// Solana address (Base58-encoded public key).
    pub address: String,
}

/// Derives Solana addresses from a unified wallet seed.
#[derive(Debug)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a new Solana deriver from a wallet.
    #[inline]
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the address at `m/44'/501'/account'/0'`.
    ///
    /// Account 0 is the one standard wallet software shows first.
    #[inline]
    pub fn derive(&self, account: u32) -> Result<DerivedAddress, Error> {
        self.derive_with_change(account, 0)
    }

    /// Derive the address at `m/44'/501'/account'/change'`.
    pub fn derive_with_change(&self, account: u32, change: u32) -> Result<DerivedAddress, Error> {
        let derived = DerivedKey::derive_solana_path(self.wallet.seed(), account, change)?;
        let keypair = Keypair::from_seed(&derived.private_key);

        Ok(DerivedAddress {
            path: DerivedKey::format_path(account, change),
            secret_key_hex: keypair.to_secret_hex(),
            address: keypair.address(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    /// Account 0 address for `TEST_MNEMONIC`, as derived by standard
    /// Solana wallets (Phantom, Solflare) at m/44'/501'/0'/0'.
    const EXPECTED_ADDRESS: &str = "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk";

    fn test_wallet() -> Wallet {
        Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap()
    }

    #[test]
    fn known_vector_account_zero() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive(0).unwrap();

        assert_eq!(addr.address, EXPECTED_ADDRESS);
        assert_eq!(addr.path, "m/44'/501'/0'/0'");
        assert_eq!(
            addr.secret_key_hex.as_str(),
            "37df573b3ac4ad5b522e064e25b63ea16bcbe79d449e81a0268d1047948bb445\
             f036276246a75b9de3349ed42b15e232f6518fc20f5fcd4f1d64e81f9bd258f7"
        );
    }

    #[test]
    fn deterministic_derivation() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);

        let a = deriver.derive(0).unwrap();
        let b = deriver.derive(0).unwrap();
        assert_eq!(a.address, b.address);
        assert_eq!(*a.secret_key_hex, *b.secret_key_hex);
    }

    #[test]
    fn accounts_yield_distinct_addresses() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);

        let a = deriver.derive(0).unwrap();
        let b = deriver.derive(1).unwrap();
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn secret_hex_reimports_to_same_address() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive(0).unwrap();

        let keypair = Keypair::from_text(&addr.secret_key_hex).unwrap();
        assert_eq!(keypair.address(), addr.address);
    }
}
