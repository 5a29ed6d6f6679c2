//! Ethereum address computation and EIP-55 checksum formatting.

use alloc::string::String;

use kura::hash::keccak256;

/// Compute the 20-byte Ethereum address for an uncompressed public key.
///
/// The address is the last 20 bytes of the Keccak-256 hash of the 64-byte
/// public key (without the 0x04 SEC1 prefix).
#[must_use]
pub fn public_key_to_address(public_key_bytes: &[u8]) -> [u8; 20] {
    // Skip the 0x04 prefix if the key is in SEC1 uncompressed form.
    let key_bytes = if public_key_bytes.len() == 65 && public_key_bytes[0] == 0x04 {
        &public_key_bytes[1..]
    } else {
        public_key_bytes
    };

    let hash = keccak256(key_bytes);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Format a 20-byte address with the EIP-55 mixed-case checksum.
#[must_use]
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    let addr_hex = hex::encode(address);
    let hash = keccak256(addr_hex.as_bytes());

    let mut result = String::with_capacity(42);
    result.push_str("0x");

    for (i, c) in addr_hex.chars().enumerate() {
        if c.is_ascii_alphabetic() {
            let nibble = (hash[i / 2] >> (4 * (1 - i % 2))) & 0xf;
            if nibble >= 8 {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // EIP-55 reference addresses.
    #[test]
    fn checksum_reference_vectors() {
        let cases: [([u8; 20], &str); 2] = [
            (
                hex!("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"),
                "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            ),
            (
                hex!("fb6916095ca1df60bb79ce92ce3ea74c37c5d359"),
                "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            ),
        ];
        for (raw, expected) in cases {
            assert_eq!(to_checksum_address(&raw), expected);
        }
    }

    #[test]
    fn prefix_is_stripped_from_sec1_key() {
        let mut sec1 = [0u8; 65];
        sec1[0] = 0x04;
        sec1[1..].copy_from_slice(&[0xabu8; 64]);

        assert_eq!(
            public_key_to_address(&sec1),
            public_key_to_address(&[0xabu8; 64])
        );
    }
}
