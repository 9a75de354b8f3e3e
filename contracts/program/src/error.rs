//! Crossvote Program Error Types

use pinocchio::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CrossvoteProgramError {
    #[error("No voting engine deployed at target")]
    UnknownVotingEngine = 1000,
}

impl From<CrossvoteProgramError> for ProgramError {
    fn from(e: CrossvoteProgramError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
