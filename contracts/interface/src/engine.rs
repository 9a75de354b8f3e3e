//! Call interface of the voting engine.
//!
//! The authenticator forwards every validated action through exactly one of
//! these entrypoints. The engine owns proposal state and tallying and never
//! writes authenticator storage.

use pinocchio::{program_error::ProgramError, ProgramResult};
use thiserror::Error;

use crate::{Choice, Felt, IndexedStrategy, Strategy, UserAddress, U256};

pub const PROPOSE_ENTRYPOINT: &str = "propose";
pub const UPDATE_PROPOSAL_ENTRYPOINT: &str = "update_proposal";
pub const VOTE_ENTRYPOINT: &str = "vote";

pub trait VotingEngine {
    fn propose(
        &mut self,
        author: UserAddress,
        metadata_uri: &[Felt],
        execution_strategy: &Strategy,
        user_proposal_validation_params: &[Felt],
    ) -> ProgramResult;

    fn update_proposal(
        &mut self,
        author: UserAddress,
        proposal_id: U256,
        execution_strategy: &Strategy,
        metadata_uri: &[Felt],
    ) -> ProgramResult;

    fn vote(
        &mut self,
        voter: UserAddress,
        proposal_id: U256,
        choice: Choice,
        user_voting_strategies: &[IndexedStrategy],
        metadata_uri: &[Felt],
    ) -> ProgramResult;
}

/// Error codes a voting engine reports back through the dispatcher.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum VotingEngineError {
    #[error("Proposal not found")]
    ProposalNotFound = 4000,

    #[error("Voting period has not started")]
    VotingPeriodNotStarted,

    #[error("Voting period has ended")]
    VotingPeriodEnded,

    #[error("Voter has already voted")]
    AlreadyVoted,

    #[error("Caller is not the proposal author")]
    InvalidCaller,
}

impl From<VotingEngineError> for ProgramError {
    fn from(e: VotingEngineError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
