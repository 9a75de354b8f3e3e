//! Crossvote Instruction Definitions

use borsh::{BorshDeserialize, BorshSerialize};
use crossvote_interface::{Action, Felt, L1Address, L2Address, UserAddress};
use crossvote_state::SignatureProof;
use pinocchio::program_error::ProgramError;

/// Instruction discriminators (borsh variant index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InstructionDiscriminator {
    AuthenticateWithSignature = 0,
    AuthenticateWithSessionKey = 1,
    AuthenticateWithCommit = 2,
    RecordCommit = 3,
    RegisterSessionWithOwnerSig = 4,
    RegisterSessionWithOwnerTx = 5,
    RevokeSessionWithOwnerSig = 6,
    RevokeSessionWithOwnerTx = 7,
    RevokeSessionWithSessionKeySig = 8,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum CrossvoteInstruction {
    /// Authenticate an action signed by its author or voter and forward it to
    /// the voting engine at `target`.
    ///
    /// The proof kind must match the address kind of the claimed identity.
    AuthenticateWithSignature {
        target: L2Address,
        action: Action,
        proof: SignatureProof,
    },

    /// Authenticate an action signed by a session key the claimed identity
    /// delegated to.
    AuthenticateWithSessionKey {
        target: L2Address,
        action: Action,
        session_public_key: [u8; 32],
        /// Ed25519 signature (64 bytes)
        signature: Vec<u8>,
    },

    /// Authenticate an action against a commitment its L1 author relayed
    /// beforehand.
    AuthenticateWithCommit { target: L2Address, action: Action },

    /// Relay handler for commitments sent by the L1 commit contract.
    ///
    /// Only accepted when delivered as an L1 message from that contract.
    RecordCommit {
        sender: L1Address,
        payload_hash: Felt,
    },

    /// Register a session key, authorized by an owner signature.
    RegisterSessionWithOwnerSig {
        owner: UserAddress,
        session_public_key: [u8; 32],
        /// Lifetime in seconds
        duration: u64,
        salt: Felt,
        proof: SignatureProof,
    },

    /// Register a session key, authorized by a commitment from the L1 owner.
    RegisterSessionWithOwnerTx {
        owner: L1Address,
        session_public_key: [u8; 32],
        duration: u64,
    },

    /// Revoke a session key, authorized by an owner signature.
    RevokeSessionWithOwnerSig {
        owner: UserAddress,
        session_public_key: [u8; 32],
        salt: Felt,
        proof: SignatureProof,
    },

    /// Revoke a session key, authorized by a commitment from the L1 owner.
    RevokeSessionWithOwnerTx {
        owner: L1Address,
        session_public_key: [u8; 32],
    },

    /// Revoke a session key with a signature by the session key itself.
    RevokeSessionWithSessionKeySig {
        owner: UserAddress,
        session_public_key: [u8; 32],
        salt: Felt,
        signature: Vec<u8>,
    },
}

impl CrossvoteInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        Self::try_from_slice(input).map_err(|_| ProgramError::InvalidInstructionData)
    }

    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        borsh::to_vec(self).map_err(|_| ProgramError::InvalidInstructionData)
    }

    pub fn discriminator(&self) -> InstructionDiscriminator {
        match self {
            Self::AuthenticateWithSignature { .. } => {
                InstructionDiscriminator::AuthenticateWithSignature
            },
            Self::AuthenticateWithSessionKey { .. } => {
                InstructionDiscriminator::AuthenticateWithSessionKey
            },
            Self::AuthenticateWithCommit { .. } => InstructionDiscriminator::AuthenticateWithCommit,
            Self::RecordCommit { .. } => InstructionDiscriminator::RecordCommit,
            Self::RegisterSessionWithOwnerSig { .. } => {
                InstructionDiscriminator::RegisterSessionWithOwnerSig
            },
            Self::RegisterSessionWithOwnerTx { .. } => {
                InstructionDiscriminator::RegisterSessionWithOwnerTx
            },
            Self::RevokeSessionWithOwnerSig { .. } => {
                InstructionDiscriminator::RevokeSessionWithOwnerSig
            },
            Self::RevokeSessionWithOwnerTx { .. } => {
                InstructionDiscriminator::RevokeSessionWithOwnerTx
            },
            Self::RevokeSessionWithSessionKeySig { .. } => {
                InstructionDiscriminator::RevokeSessionWithSessionKeySig
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminator_matches_wire_tag() {
        let ix = CrossvoteInstruction::RecordCommit {
            sender: [1u8; 20],
            payload_hash: [2u8; 32],
        };
        let bytes = ix.pack().unwrap();
        assert_eq!(bytes[0], ix.discriminator() as u8);
        assert_eq!(CrossvoteInstruction::unpack(&bytes).unwrap(), ix);
    }

    #[test]
    fn test_unpack_rejects_garbage() {
        assert_eq!(
            CrossvoteInstruction::unpack(&[42, 0, 0]),
            Err(ProgramError::InvalidInstructionData)
        );
        assert_eq!(
            CrossvoteInstruction::unpack(&[]),
            Err(ProgramError::InvalidInstructionData)
        );
    }
}
