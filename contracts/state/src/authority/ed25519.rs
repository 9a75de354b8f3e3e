//! Ed25519 verification for L2-native key pairs.
//!
//! An L2 externally owned address is its ed25519 public key; session keys
//! use the same scheme.

use crossvote_interface::L2Address;
use ed25519_dalek::{Signature, VerifyingKey};

use crate::typed_data::{l2_digest, Domain};

/// Length of an ed25519 signature, the only length session keys produce.
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Strict ed25519 verification of `signature` over `message`.
pub fn verify_ed25519(public_key: &[u8; 32], message: &[u8], signature: &[u8]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };
    verifying_key.verify_strict(message, &signature).is_ok()
}

/// Checks an L2 signature over `struct_hash` by `claimed_signer`.
pub fn verify_l2_signature(
    domain: &Domain,
    struct_hash: &[u8; 32],
    signature: &[u8],
    claimed_signer: &L2Address,
) -> bool {
    let digest = l2_digest(domain, claimed_signer, struct_hash);
    verify_ed25519(claimed_signer, &digest, signature)
}
