//! Raw Ethereum private key import.

use alloc::format;
use alloc::string::String;

use k256::ecdsa::SigningKey;
use zeroize::Zeroizing;

use crate::address::{public_key_to_address, to_checksum_address};
use crate::Error;

/// An Ethereum private key parsed from raw input.
pub struct EthPrivateKey {
    inner: SigningKey,
}

impl EthPrivateKey {
    /// Create from a raw 32-byte secret scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrivateKey`] if the bytes are zero or not a
    /// valid secp256k1 scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 32 {
            return Err(Error::InvalidPrivateKey);
        }
        let inner = SigningKey::from_slice(bytes).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self { inner })
    }

    /// Parse from a 64-character hex string, with or without `0x` prefix.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let text = text.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);
        let bytes = Zeroizing::new(hex::decode(text).map_err(|_| Error::InvalidPrivateKey)?);
        Self::from_bytes(&bytes)
    }

    /// The EIP-55 checksummed address for this key.
    #[must_use]
    pub fn address(&self) -> String {
        let public_key = self.inner.verifying_key().to_encoded_point(false);
        to_checksum_address(&public_key_to_address(public_key.as_bytes()))
    }

    /// Export as `0x`-prefixed hex (zeroized on drop).
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("0x{}", hex::encode(self.inner.to_bytes())))
    }
}

impl core::fmt::Debug for EthPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EthPrivateKey([REDACTED], address={})", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const TEST_KEY: [u8; 32] =
        hex!("1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727");

    #[test]
    fn hex_import_with_and_without_prefix() {
        let bare = EthPrivateKey::from_hex(
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727",
        )
        .unwrap();
        let prefixed = EthPrivateKey::from_hex(
            "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727",
        )
        .unwrap();
        assert_eq!(bare.address(), prefixed.address());
        assert_eq!(bare.address(), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    }

    #[test]
    fn export_roundtrip() {
        let key = EthPrivateKey::from_bytes(&TEST_KEY).unwrap();
        let reimported = EthPrivateKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key.address(), reimported.address());
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(EthPrivateKey::from_hex("0xabcd").is_err());
        assert!(EthPrivateKey::from_bytes(&[1u8; 31]).is_err());
    }

    #[test]
    fn zero_key_rejected() {
        assert!(EthPrivateKey::from_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(EthPrivateKey::from_hex("not-hex-at-all").is_err());
    }
}
