//! Secp256k1 verification for L1 identities.
//!
//! Handles recovery-id normalization, low-s enforcement, public-key recovery,
//! and Keccak-256 address derivation.

use crossvote_assertions::assert_bytes_eq;
use crossvote_interface::L1Address;

use super::L1Signature;
use crate::hash::keccak256;
use crate::typed_data::{l1_digest, Domain};

/// Derives the L1 address of a public key: the last 20 bytes of the
/// Keccak-256 hash of its uncompressed encoding.
pub fn l1_address_from_public_key(public_key: &libsecp256k1::PublicKey) -> L1Address {
    let serialized = public_key.serialize();
    let hash = keccak256(&serialized[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Recovers the signer address of `digest`.
///
/// Returns `None` for malformed signatures, unknown recovery ids, and
/// high-s signatures.
pub fn recover_l1_address(digest: &[u8; 32], signature: &L1Signature) -> Option<L1Address> {
    let recovery_id = match signature.v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return None,
    };

    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&signature.r);
    compact[32..].copy_from_slice(&signature.s);
    let parsed = libsecp256k1::Signature::parse_standard(&compact).ok()?;
    if parsed.s.is_high() {
        return None;
    }

    let recovery_id = libsecp256k1::RecoveryId::parse(recovery_id).ok()?;
    let message = libsecp256k1::Message::parse(digest);
    let public_key = libsecp256k1::recover(&message, &parsed, &recovery_id).ok()?;
    Some(l1_address_from_public_key(&public_key))
}

/// Checks an L1 signature over `struct_hash` against `claimed_address`.
pub fn verify_l1_signature(
    domain: &Domain,
    struct_hash: &[u8; 32],
    signature: &L1Signature,
    claimed_address: &L1Address,
) -> bool {
    let digest = l1_digest(domain, struct_hash);
    match recover_l1_address(&digest, signature) {
        Some(recovered) => assert_bytes_eq(&recovered, claimed_address, 20),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossvote_interface::felt_from_u64;

    fn secret(byte: u8) -> libsecp256k1::SecretKey {
        libsecp256k1::SecretKey::parse(&[byte; 32]).unwrap()
    }

    fn sign(digest: &[u8; 32], key: &libsecp256k1::SecretKey) -> L1Signature {
        let (signature, recovery_id) =
            libsecp256k1::sign(&libsecp256k1::Message::parse(digest), key);
        let compact = signature.serialize();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&compact[..32]);
        s.copy_from_slice(&compact[32..]);
        L1Signature {
            r,
            s,
            v: recovery_id.serialize() + 27,
        }
    }

    fn address_of(key: &libsecp256k1::SecretKey) -> L1Address {
        l1_address_from_public_key(&libsecp256k1::PublicKey::from_secret_key(key))
    }

    #[test]
    fn test_known_address_vector() {
        let bytes: [u8; 32] =
            hex::decode("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")
                .unwrap()
                .try_into()
                .unwrap();
        let key = libsecp256k1::SecretKey::parse(&bytes).unwrap();
        assert_eq!(
            hex::encode(address_of(&key)),
            "2c7536e3605d9c16a7a3d7b1898e529396a65c23"
        );
    }

    #[test]
    fn test_recover_roundtrip() {
        let key = secret(7);
        let digest = [42u8; 32];
        let signature = sign(&digest, &key);
        assert_eq!(recover_l1_address(&digest, &signature), Some(address_of(&key)));
    }

    #[test]
    fn test_accepts_both_recovery_id_forms() {
        let key = secret(7);
        let digest = [42u8; 32];
        let mut signature = sign(&digest, &key);
        signature.v -= 27;
        assert_eq!(recover_l1_address(&digest, &signature), Some(address_of(&key)));
    }

    #[test]
    fn test_rejects_unknown_recovery_id() {
        let key = secret(7);
        let digest = [42u8; 32];
        let mut signature = sign(&digest, &key);
        signature.v = 29;
        assert_eq!(recover_l1_address(&digest, &signature), None);
    }

    #[test]
    fn test_verify_rejects_other_signer() {
        let domain = Domain::new("crossvote", "1", felt_from_u64(1), [9u8; 32]);
        let struct_hash = [5u8; 32];
        let digest = l1_digest(&domain, &struct_hash);
        let signature = sign(&digest, &secret(7));
        assert!(verify_l1_signature(&domain, &struct_hash, &signature, &address_of(&secret(7))));
        assert!(!verify_l1_signature(&domain, &struct_hash, &signature, &address_of(&secret(8))));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let domain = Domain::new("crossvote", "1", felt_from_u64(1), [9u8; 32]);
        let signature = L1Signature {
            r: [0u8; 32],
            s: [0u8; 32],
            v: 27,
        };
        assert!(!verify_l1_signature(&domain, &[5u8; 32], &signature, &[1u8; 20]));
    }
}
