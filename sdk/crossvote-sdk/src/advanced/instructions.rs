//! Raw instruction constructors. Callers are responsible for producing
//! proofs that match the authenticator's domain.

use crossvote_interface::{Action, Felt, L1Address, L2Address, UserAddress};
use crossvote_program::instruction::CrossvoteInstruction;
use crossvote_state::SignatureProof;

use crate::error::Result;

pub fn authenticate_with_signature(
    target: L2Address,
    action: Action,
    proof: SignatureProof,
) -> CrossvoteInstruction {
    CrossvoteInstruction::AuthenticateWithSignature {
        target,
        action,
        proof,
    }
}

pub fn authenticate_with_session_key(
    target: L2Address,
    action: Action,
    session_public_key: [u8; 32],
    signature: Vec<u8>,
) -> CrossvoteInstruction {
    CrossvoteInstruction::AuthenticateWithSessionKey {
        target,
        action,
        session_public_key,
        signature,
    }
}

pub fn authenticate_with_commit(target: L2Address, action: Action) -> CrossvoteInstruction {
    CrossvoteInstruction::AuthenticateWithCommit { target, action }
}

/// Relay message the L1 commit contract sends for `sender`.
pub fn record_commit(sender: L1Address, payload_hash: Felt) -> CrossvoteInstruction {
    CrossvoteInstruction::RecordCommit {
        sender,
        payload_hash,
    }
}

pub fn register_session_with_owner_sig(
    owner: UserAddress,
    session_public_key: [u8; 32],
    duration: u64,
    salt: Felt,
    proof: SignatureProof,
) -> CrossvoteInstruction {
    CrossvoteInstruction::RegisterSessionWithOwnerSig {
        owner,
        session_public_key,
        duration,
        salt,
        proof,
    }
}

pub fn register_session_with_owner_tx(
    owner: L1Address,
    session_public_key: [u8; 32],
    duration: u64,
) -> CrossvoteInstruction {
    CrossvoteInstruction::RegisterSessionWithOwnerTx {
        owner,
        session_public_key,
        duration,
    }
}

pub fn revoke_session_with_owner_sig(
    owner: UserAddress,
    session_public_key: [u8; 32],
    salt: Felt,
    proof: SignatureProof,
) -> CrossvoteInstruction {
    CrossvoteInstruction::RevokeSessionWithOwnerSig {
        owner,
        session_public_key,
        salt,
        proof,
    }
}

pub fn revoke_session_with_owner_tx(
    owner: L1Address,
    session_public_key: [u8; 32],
) -> CrossvoteInstruction {
    CrossvoteInstruction::RevokeSessionWithOwnerTx {
        owner,
        session_public_key,
    }
}

pub fn revoke_session_with_session_key_sig(
    owner: UserAddress,
    session_public_key: [u8; 32],
    salt: Felt,
    signature: Vec<u8>,
) -> CrossvoteInstruction {
    CrossvoteInstruction::RevokeSessionWithSessionKeySig {
        owner,
        session_public_key,
        salt,
        signature,
    }
}

/// Borsh-encodes an instruction for submission.
pub fn pack(instruction: &CrossvoteInstruction) -> Result<Vec<u8>> {
    Ok(borsh::to_vec(instruction)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_matches_program_encoding() {
        let instruction = record_commit([1u8; 20], [2u8; 32]);
        assert_eq!(pack(&instruction).unwrap(), instruction.pack().unwrap());
    }
}
