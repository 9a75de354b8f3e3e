//! RecordCommit instruction handler

use crossvote_interface::{Felt, L1Address};
use crossvote_state::{CommitRegistry, CrossvoteAuthenticateError, Storage};
use pinocchio::{msg, ProgramResult};

use crate::{AuthenticatorConfig, Host};

pub fn process_record_commit(
    config: &AuthenticatorConfig,
    host: &dyn Host,
    storage: &mut dyn Storage,
    sender: L1Address,
    payload_hash: Felt,
) -> ProgramResult {
    let origin = host.l1_message_origin();
    if origin != Some(config.l1_commit_contract) {
        msg!("Commit relayed from untrusted origin {:?}", origin);
        return Err(CrossvoteAuthenticateError::InvalidMessageSource.into());
    }

    CommitRegistry::new(storage).record(sender, payload_hash)?;
    msg!("Recorded commitment");
    Ok(())
}
