use crossvote_interface::{L1Address, L2Address, UserAddress};
use crossvote_state::authority::l1_address_from_public_key;
use crossvote_state::typed_data::{l1_digest, l2_digest};
use crossvote_state::{Domain, L1Signature, SignatureProof};
use ed25519_dalek::{Signer, SigningKey};

use crate::error::{CrossvoteSdkError, Result};

/// Abstraction for an identity that can sign typed messages for the
/// authenticator. The digest scheme follows the identity's layer.
pub trait CrossvoteSigner {
    fn identity(&self) -> UserAddress;

    fn sign_struct(&self, domain: &Domain, struct_hash: &[u8; 32]) -> SignatureProof;
}

/// Secp256k1 key of an L1 account.
pub struct L1Signer {
    secret: libsecp256k1::SecretKey,
    address: L1Address,
}

impl L1Signer {
    pub fn from_bytes(secret: &[u8; 32]) -> Result<Self> {
        let secret = libsecp256k1::SecretKey::parse(secret)
            .map_err(|_| CrossvoteSdkError::InvalidSecretKey)?;
        let address =
            l1_address_from_public_key(&libsecp256k1::PublicKey::from_secret_key(&secret));
        Ok(Self { secret, address })
    }

    pub fn random() -> Self {
        loop {
            if let Ok(signer) = Self::from_bytes(&rand::random()) {
                return signer;
            }
        }
    }

    pub fn address(&self) -> L1Address {
        self.address
    }

    pub fn sign_digest(&self, digest: &[u8; 32]) -> L1Signature {
        let message = libsecp256k1::Message::parse(digest);
        let (signature, recovery_id) = libsecp256k1::sign(&message, &self.secret);
        let mut rsv = [0u8; 65];
        rsv[..64].copy_from_slice(&signature.serialize());
        rsv[64] = recovery_id.serialize() + 27;
        L1Signature::from_rsv(&rsv)
    }
}

impl CrossvoteSigner for L1Signer {
    fn identity(&self) -> UserAddress {
        UserAddress::L1(self.address)
    }

    fn sign_struct(&self, domain: &Domain, struct_hash: &[u8; 32]) -> SignatureProof {
        SignatureProof::L1(self.sign_digest(&l1_digest(domain, struct_hash)))
    }
}

/// Ed25519 key pair of an L2 account. The address is the public key.
pub struct L2Signer {
    signing_key: SigningKey,
}

impl L2Signer {
    pub fn from_bytes(secret: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(secret),
        }
    }

    pub fn random() -> Self {
        Self::from_bytes(&rand::random())
    }

    pub fn address(&self) -> L2Address {
        self.signing_key.verifying_key().to_bytes()
    }
}

impl CrossvoteSigner for L2Signer {
    fn identity(&self) -> UserAddress {
        UserAddress::L2(self.address())
    }

    fn sign_struct(&self, domain: &Domain, struct_hash: &[u8; 32]) -> SignatureProof {
        let digest = l2_digest(domain, &self.address(), struct_hash);
        SignatureProof::L2(self.signing_key.sign(&digest).to_bytes().to_vec())
    }
}

/// Ed25519 session key acting on behalf of `owner`.
pub struct SessionSigner {
    signing_key: SigningKey,
    owner: UserAddress,
}

impl SessionSigner {
    pub fn new(secret: &[u8; 32], owner: UserAddress) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(secret),
            owner,
        }
    }

    pub fn random(owner: UserAddress) -> Self {
        Self::new(&rand::random(), owner)
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    pub fn owner(&self) -> UserAddress {
        self.owner
    }

    /// Signs with the session key itself as the digest's signer word.
    pub fn sign_struct(&self, domain: &Domain, struct_hash: &[u8; 32]) -> Vec<u8> {
        let digest = l2_digest(domain, &self.public_key(), struct_hash);
        self.signing_key.sign(&digest).to_bytes().to_vec()
    }
}
