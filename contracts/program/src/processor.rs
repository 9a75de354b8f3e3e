//! Instruction Processor
//!
//! Decodes an instruction, routes it to its handler, and applies the
//! handler's storage writes only if it succeeds.

use crossvote_state::{Storage, StorageTransaction};
use pinocchio::{msg, ProgramResult};

use crate::actions;
use crate::instruction::CrossvoteInstruction;
use crate::{AuthenticatorConfig, Host};

pub fn process_instruction(
    config: &AuthenticatorConfig,
    host: &mut dyn Host,
    storage: &mut dyn Storage,
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = CrossvoteInstruction::unpack(instruction_data).map_err(|e| {
        msg!("Failed to unpack instruction: {:?}", e);
        e
    })?;
    msg!("Processing instruction {:?}", instruction.discriminator());

    let mut tx = StorageTransaction::new(storage);
    let result = match instruction {
        CrossvoteInstruction::AuthenticateWithSignature {
            target,
            action,
            proof,
        } => actions::process_authenticate_with_signature(
            config, host, &mut tx, &target, &action, &proof,
        ),

        CrossvoteInstruction::AuthenticateWithSessionKey {
            target,
            action,
            session_public_key,
            signature,
        } => actions::process_authenticate_with_session_key(
            config,
            host,
            &mut tx,
            &target,
            &action,
            session_public_key,
            signature,
        ),

        CrossvoteInstruction::AuthenticateWithCommit { target, action } => {
            actions::process_authenticate_with_commit(config, host, &mut tx, &target, &action)
        },

        CrossvoteInstruction::RecordCommit {
            sender,
            payload_hash,
        } => actions::process_record_commit(config, &*host, &mut tx, sender, payload_hash),

        CrossvoteInstruction::RegisterSessionWithOwnerSig {
            owner,
            session_public_key,
            duration,
            salt,
            proof,
        } => actions::process_register_session_with_owner_sig(
            config,
            &*host,
            &mut tx,
            owner,
            session_public_key,
            duration,
            salt,
            &proof,
        ),

        CrossvoteInstruction::RegisterSessionWithOwnerTx {
            owner,
            session_public_key,
            duration,
        } => actions::process_register_session_with_owner_tx(
            config,
            &*host,
            &mut tx,
            owner,
            session_public_key,
            duration,
        ),

        CrossvoteInstruction::RevokeSessionWithOwnerSig {
            owner,
            session_public_key,
            salt,
            proof,
        } => actions::process_revoke_session_with_owner_sig(
            config,
            &*host,
            &mut tx,
            owner,
            session_public_key,
            salt,
            &proof,
        ),

        CrossvoteInstruction::RevokeSessionWithOwnerTx {
            owner,
            session_public_key,
        } => actions::process_revoke_session_with_owner_tx(
            config,
            &mut tx,
            owner,
            session_public_key,
        ),

        CrossvoteInstruction::RevokeSessionWithSessionKeySig {
            owner,
            session_public_key,
            salt,
            signature,
        } => actions::process_revoke_session_with_session_key_sig(
            config,
            &mut tx,
            owner,
            session_public_key,
            salt,
            &signature,
        ),
    };

    match result {
        Ok(()) => {
            tx.commit();
            Ok(())
        },
        Err(e) => {
            msg!("Instruction failed, discarding state changes: {:?}", e);
            Err(e)
        },
    }
}
