//! P2PKH address encoding.

use alloc::string::String;

use kura::hash::{double_sha256, hash160};

use crate::Network;

/// Encode a compressed public key as a Base58Check P2PKH address.
///
/// Layout: `version || hash160(pubkey)` with a 4-byte double-SHA-256
/// checksum appended.
#[must_use]
pub fn p2pkh_address(compressed_pubkey: &[u8; 33], network: Network) -> String {
    let mut payload = [0u8; 25];
    payload[0] = network.p2pkh_prefix();
    payload[1..21].copy_from_slice(&hash160(compressed_pubkey));

    let checksum = double_sha256(&payload[..21]);
    payload[21..].copy_from_slice(&checksum[..4]);

    bs58::encode(payload).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn genesis_style_known_vector() {
        // Compressed public key at m/44'/0'/0'/0/0 for the BIP-39 test
        // mnemonic; address cross-checked against bitcoinjs-lib.
        let pubkey: [u8; 33] =
            hex!("03aaeb52dd7494c361049de67cc680e83ebcbbbdbeb13637d92cd845f70308af5e");
        assert_eq!(
            p2pkh_address(&pubkey, Network::Mainnet),
            "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA"
        );
    }

    #[test]
    fn mainnet_addresses_start_with_one() {
        let address = p2pkh_address(&[0x02; 33], Network::Mainnet);
        assert!(address.starts_with('1'));
    }

    #[test]
    fn testnet_prefix_differs() {
        let mainnet = p2pkh_address(&[0x02; 33], Network::Mainnet);
        let testnet = p2pkh_address(&[0x02; 33], Network::Testnet);
        assert_ne!(mainnet, testnet);
    }
}
