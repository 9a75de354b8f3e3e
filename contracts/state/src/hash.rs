//! Keccak-256 helpers shared by both hash schemes.

use crossvote_interface::Felt;
use sha3::{Digest, Keccak256};

/// Keccak-256 of the empty input.
pub const EMPTY_KECCAK: [u8; 32] = [
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
    0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
];

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    keccak256_concat(&[data])
}

/// Keccak-256 over the concatenation of `parts`.
pub fn keccak256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest);
    hash
}

/// Keccak-256 over a sequence of 32-byte words.
pub fn keccak256_words(words: &[[u8; 32]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for word in words {
        hasher.update(word);
    }
    let digest = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest);
    hash
}

/// Keccak-256 truncated to 250 bits so the result fits a field element.
pub fn sn_keccak(data: &[u8]) -> Felt {
    let mut hash = keccak256(data);
    hash[0] &= 0x03;
    hash
}

/// Truncated Keccak-256 over a sequence of words.
pub fn sn_keccak_words(words: &[Felt]) -> Felt {
    let mut hash = keccak256_words(words);
    hash[0] &= 0x03;
    hash
}

/// Entrypoint selector for `name`.
pub fn selector(name: &str) -> Felt {
    sn_keccak(name.as_bytes())
}
