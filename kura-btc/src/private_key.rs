//! Bitcoin private key with WIF encoding.

use alloc::string::String;
use alloc::vec::Vec;

use k256::ecdsa::SigningKey;
use kura::hash::double_sha256;
use kura::Error;
use zeroize::Zeroizing;

use crate::address::p2pkh_address;
use crate::Network;

/// A secp256k1 Bitcoin private key.
///
/// Tracks whether the corresponding public key is serialized compressed,
/// which WIF records with a trailing 0x01 flag byte. HD-derived keys are
/// always compressed.
#[derive(Clone)]
pub struct BtcPrivateKey {
    inner: SigningKey,
    compressed: bool,
}

impl BtcPrivateKey {
    /// Create from a raw 32-byte secret, compressed by default.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 32 {
            return Err(Error::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let inner = SigningKey::from_slice(bytes).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self {
            inner,
            compressed: true,
        })
    }

    /// Import from WIF, returning the key and the encoded network.
    pub fn from_wif(wif: &str) -> Result<(Self, Network), Error> {
        let decoded: Zeroizing<Vec<u8>> = Zeroizing::new(
            bs58::decode(wif)
                .into_vec()
                .map_err(|_| Error::InvalidEncoding)?,
        );

        // version || key32 || [0x01] || checksum4
        if decoded.len() != 37 && decoded.len() != 38 {
            return Err(Error::InvalidLength {
                expected: 37,
                actual: decoded.len(),
            });
        }

        let payload_len = decoded.len() - 4;
        let computed = double_sha256(&decoded[..payload_len]);
        if decoded[payload_len..] != computed[..4] {
            return Err(Error::InvalidChecksum);
        }

        let network = match decoded[0] {
            0x80 => Network::Mainnet,
            0xef => Network::Testnet,
            _ => return Err(Error::InvalidEncoding),
        };

        let compressed = decoded.len() == 38;
        if compressed && decoded[33] != 0x01 {
            return Err(Error::InvalidEncoding);
        }

        let inner =
            SigningKey::from_slice(&decoded[1..33]).map_err(|_| Error::InvalidPrivateKey)?;
        Ok((Self { inner, compressed }, network))
    }

    /// Export as WIF.
    #[must_use]
    pub fn to_wif(&self, network: Network) -> Zeroizing<String> {
        let mut data = Zeroizing::new([0u8; 38]);
        data[0] = network.wif_prefix();
        data[1..33].copy_from_slice(&self.inner.to_bytes());

        let payload_len = if self.compressed {
            data[33] = 0x01;
            34
        } else {
            33
        };

        let checksum = double_sha256(&data[..payload_len]);
        data[payload_len..payload_len + 4].copy_from_slice(&checksum[..4]);

        Zeroizing::new(bs58::encode(&data[..payload_len + 4]).into_string())
    }

    /// The compressed SEC1 public key bytes.
    #[must_use]
    pub fn public_key_compressed(&self) -> [u8; 33] {
        let point = self.inner.verifying_key().to_encoded_point(true);
        let mut out = [0u8; 33];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// The P2PKH address for this key.
    ///
    /// Only defined for compressed keys here; HD derivation never
    /// produces uncompressed ones.
    #[must_use]
    pub fn address(&self, network: Network) -> String {
        p2pkh_address(&self.public_key_compressed(), network)
    }

    /// Whether WIF export carries the compression flag.
    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The raw 32-byte secret.
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.inner.to_bytes().into())
    }
}

impl core::fmt::Debug for BtcPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "BtcPrivateKey([REDACTED], compressed={})",
            self.compressed
        )
    }
}

impl core::str::FromStr for BtcPrivateKey {
    type Err = Error;

    /// Parse from WIF or 64-character hex.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();

        // WIF strings are 51-52 Base58 characters.
        if (51..=52).contains(&s.len()) {
            if let Ok((key, _)) = Self::from_wif(s) {
                return Ok(key);
            }
        }

        let stripped = s.strip_prefix("0x").unwrap_or(s);
        if stripped.len() == 64 {
            let bytes =
                Zeroizing::new(hex::decode(stripped).map_err(|_| Error::InvalidEncoding)?);
            return Self::from_bytes(&bytes);
        }

        Err(Error::InvalidPrivateKey)
    }
}
