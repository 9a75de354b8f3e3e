//! Session key scheme.
//!
//! The claimed identity is the owner who delegated to the key. Checks run in
//! a fixed order: registration, revocation, expiry, signature length, then the signature.

use borsh::{BorshDeserialize, BorshSerialize};
use crossvote_assertions::check_condition;
use crossvote_interface::{Action, L2Address, UserAddress};
use crossvote_state::authority::{verify_l2_signature, SIGNATURE_LENGTH};
use crossvote_state::{CrossvoteAuthenticateError, SessionKeyRegistry};
use pinocchio::{msg, program_error::ProgramError};

use super::{action_struct_hash, AuthContext, AuthScheme, Authenticator};

pub struct SessionKeyAuthenticator;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionProof {
    pub session_public_key: [u8; 32],
    pub signature: Vec<u8>,
}

impl Authenticator for SessionKeyAuthenticator {
    type Proof = SessionProof;

    fn scheme(&self) -> AuthScheme {
        AuthScheme::SessionKey
    }

    fn authenticate(
        &self,
        ctx: &mut AuthContext<'_>,
        target: &L2Address,
        action: &Action,
        proof: &SessionProof,
    ) -> Result<UserAddress, ProgramError> {
        let owner = *action.claimed_identity();
        let now = ctx.host.block_timestamp();
        SessionKeyRegistry::new(&mut *ctx.storage).validate(
            &owner,
            &proof.session_public_key,
            now,
        )?;

        check_condition(
            proof.signature.len() == SIGNATURE_LENGTH,
            CrossvoteAuthenticateError::InvalidAuthorityPayload,
        )?;
        let struct_hash = action_struct_hash(ctx.config, target, action);
        if !verify_l2_signature(
            &ctx.config.domain,
            &struct_hash,
            &proof.signature,
            &proof.session_public_key,
        ) {
            msg!("Session key signature rejected");
            return Err(CrossvoteAuthenticateError::InvalidSignature.into());
        }
        Ok(owner)
    }
}
