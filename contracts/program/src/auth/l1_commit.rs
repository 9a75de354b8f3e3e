//! L1 commit scheme: the author committed to the exact call on L1 and the
//! commitment was relayed here beforehand.

use crossvote_assertions::check_some;
use crossvote_interface::{Action, L2Address, UserAddress};
use crossvote_state::payload::action_payload_hash;
use crossvote_state::{CommitRegistry, CrossvoteAuthenticateError};
use pinocchio::{msg, program_error::ProgramError};

use super::{AuthContext, AuthScheme, Authenticator};

pub struct L1CommitAuthenticator;

impl Authenticator for L1CommitAuthenticator {
    type Proof = ();

    fn scheme(&self) -> AuthScheme {
        AuthScheme::L1Commit
    }

    fn authenticate(
        &self,
        ctx: &mut AuthContext<'_>,
        target: &L2Address,
        action: &Action,
        _proof: &(),
    ) -> Result<UserAddress, ProgramError> {
        let identity = *action.claimed_identity();
        let sender = check_some(identity.as_l1(), CrossvoteAuthenticateError::InvalidAuthorType)?;
        let payload_hash = action_payload_hash(target, action);
        CommitRegistry::new(&mut *ctx.storage).consume(sender, &payload_hash)?;
        msg!("Consumed commitment for {}", action.entrypoint());
        Ok(identity)
    }
}
