//! Signature verifiers.
//!
//! Two independent, stateless verifiers: [`secp256k1`] recovers an L1
//! address from an `(r, s, v)` signature over the structured-data digest,
//! [`ed25519`] checks an L2-native key pair signature. Neither touches
//! storage; callers combine them with the replay registries.

pub mod ed25519;
pub mod secp256k1;

use borsh::{BorshDeserialize, BorshSerialize};

pub use ed25519::{verify_ed25519, verify_l2_signature, SIGNATURE_LENGTH};
pub use secp256k1::{l1_address_from_public_key, recover_l1_address, verify_l1_signature};

/// Recoverable secp256k1 signature as produced by L1 wallets.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct L1Signature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    /// Recovery id, either `0/1` or `27/28`
    pub v: u8,
}

impl L1Signature {
    /// Splits a 65-byte `r ‖ s ‖ v` signature.
    pub fn from_rsv(bytes: &[u8; 65]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self { r, s, v: bytes[64] }
    }
}

/// Proof carried by the direct signature schemes.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum SignatureProof {
    /// Signature by an L1 key over the `0x1901` digest
    L1(L1Signature),
    /// Signature by an L2 key or account over the L2 digest. Contract
    /// accounts may use any length.
    L2(Vec<u8>),
}
