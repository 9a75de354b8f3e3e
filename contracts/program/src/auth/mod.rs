//! Authentication schemes.
//!
//! Each scheme proves that the identity an action claims actually issued it.
//! Schemes only verify; salt consumption and dispatch happen in
//! [`crate::actions`] once verification has succeeded.

pub mod l1_commit;
pub mod l1_signature;
pub mod l2_signature;
pub mod session_key;

use crossvote_interface::{Action, L2Address, UserAddress};
use crossvote_state::{ActionMessage, SignatureProof, Storage, TypedStruct};
use pinocchio::{program_error::ProgramError, ProgramResult};

use crate::{AuthenticatorConfig, Host};

pub use l1_commit::L1CommitAuthenticator;
pub use l1_signature::L1SignatureAuthenticator;
pub use l2_signature::L2SignatureAuthenticator;
pub use session_key::{SessionKeyAuthenticator, SessionProof};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AuthScheme {
    L2Signature = 0,
    L1Signature = 1,
    L1Commit = 2,
    SessionKey = 3,
}

impl AuthScheme {
    /// Whether a successful check must also consume the action's salt. A
    /// commitment is already one-shot.
    pub fn consumes_salt(&self) -> bool {
        !matches!(self, AuthScheme::L1Commit)
    }
}

/// State a scheme may read (and, for commitments, consume) while verifying.
pub struct AuthContext<'a> {
    pub config: &'a AuthenticatorConfig,
    pub host: &'a dyn Host,
    pub storage: &'a mut dyn Storage,
}

pub trait Authenticator {
    type Proof;

    fn scheme(&self) -> AuthScheme;

    /// Verifies `proof` for `action` on `target` and returns the
    /// authenticated author or voter.
    fn authenticate(
        &self,
        ctx: &mut AuthContext<'_>,
        target: &L2Address,
        action: &Action,
        proof: &Self::Proof,
    ) -> Result<UserAddress, ProgramError>;
}

/// Struct hash of `action` as bound to this authenticator and `target`.
pub fn action_struct_hash(
    config: &AuthenticatorConfig,
    target: &L2Address,
    action: &Action,
) -> [u8; 32] {
    ActionMessage {
        authenticator: &config.address,
        target,
        action,
    }
    .struct_hash()
}

/// Checks a direct signature by `signer` over `struct_hash`. The proof kind
/// must match the kind of `signer`.
pub fn verify_signature_proof(
    ctx: &AuthContext<'_>,
    signer: &UserAddress,
    struct_hash: &[u8; 32],
    proof: &SignatureProof,
) -> ProgramResult {
    match proof {
        SignatureProof::L1(signature) => {
            l1_signature::verify_l1_signer(ctx, signer, struct_hash, signature)
        },
        SignatureProof::L2(signature) => {
            l2_signature::verify_l2_signer(ctx, signer, struct_hash, signature)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_commit_scheme_skips_salt() {
        assert!(AuthScheme::L2Signature.consumes_salt());
        assert!(AuthScheme::L1Signature.consumes_salt());
        assert!(AuthScheme::SessionKey.consumes_salt());
        assert!(!AuthScheme::L1Commit.consumes_salt());
    }
}
