//! Direct L1 (secp256k1) signature scheme.

use crossvote_assertions::check_some;
use crossvote_interface::{Action, L2Address, UserAddress};
use crossvote_state::authority::verify_l1_signature;
use crossvote_state::{CrossvoteAuthenticateError, L1Signature};
use pinocchio::{msg, program_error::ProgramError, ProgramResult};

use super::{action_struct_hash, AuthContext, AuthScheme, Authenticator};

pub struct L1SignatureAuthenticator;

pub(crate) fn verify_l1_signer(
    ctx: &AuthContext<'_>,
    signer: &UserAddress,
    struct_hash: &[u8; 32],
    signature: &L1Signature,
) -> ProgramResult {
    let address = check_some(signer.as_l1(), CrossvoteAuthenticateError::InvalidAuthorType)?;
    if !verify_l1_signature(&ctx.config.domain, struct_hash, signature, address) {
        msg!("L1 signature does not recover to claimed signer");
        return Err(CrossvoteAuthenticateError::InvalidSignature.into());
    }
    Ok(())
}

impl Authenticator for L1SignatureAuthenticator {
    type Proof = L1Signature;

    fn scheme(&self) -> AuthScheme {
        AuthScheme::L1Signature
    }

    fn authenticate(
        &self,
        ctx: &mut AuthContext<'_>,
        target: &L2Address,
        action: &Action,
        proof: &L1Signature,
    ) -> Result<UserAddress, ProgramError> {
        let identity = *action.claimed_identity();
        let struct_hash = action_struct_hash(ctx.config, target, action);
        verify_l1_signer(ctx, &identity, &struct_hash, proof)?;
        Ok(identity)
    }
}
