//! Direct L2 signature scheme.
//!
//! Plain key pairs are checked as ed25519 against the address; contract
//! accounts validate through the host.

use crossvote_assertions::check_some;
use crossvote_interface::{Action, L2Address, UserAddress};
use crossvote_state::authority::verify_ed25519;
use crossvote_state::typed_data::l2_digest;
use crossvote_state::CrossvoteAuthenticateError;
use pinocchio::{msg, program_error::ProgramError, ProgramResult};

use super::{action_struct_hash, AuthContext, AuthScheme, Authenticator};

pub struct L2SignatureAuthenticator;

pub(crate) fn verify_l2_signer(
    ctx: &AuthContext<'_>,
    signer: &UserAddress,
    struct_hash: &[u8; 32],
    signature: &[u8],
) -> ProgramResult {
    let account = check_some(signer.as_l2(), CrossvoteAuthenticateError::InvalidAuthorType)?;
    let digest = l2_digest(&ctx.config.domain, account, struct_hash);
    let valid = match ctx.host.validate_account_signature(account, &digest, signature) {
        Some(valid) => valid,
        None => verify_ed25519(account, &digest, signature),
    };
    if !valid {
        msg!("L2 signature rejected for claimed signer");
        return Err(CrossvoteAuthenticateError::InvalidSignature.into());
    }
    Ok(())
}

impl Authenticator for L2SignatureAuthenticator {
    type Proof = Vec<u8>;

    fn scheme(&self) -> AuthScheme {
        AuthScheme::L2Signature
    }

    fn authenticate(
        &self,
        ctx: &mut AuthContext<'_>,
        target: &L2Address,
        action: &Action,
        proof: &Vec<u8>,
    ) -> Result<UserAddress, ProgramError> {
        let identity = *action.claimed_identity();
        let struct_hash = action_struct_hash(ctx.config, target, action);
        verify_l2_signer(ctx, &identity, &struct_hash, proof)?;
        Ok(identity)
    }
}
