//! Forwards authenticated actions to the voting engine.

use crossvote_assertions::check_some;
use crossvote_interface::{Action, L2Address};
use pinocchio::{msg, ProgramResult};

use crate::{CrossvoteProgramError, Host};

/// Calls the entrypoint matching `action` on the engine at `target`, passing
/// the validated fields unchanged. Engine errors propagate as is.
pub fn forward(host: &mut dyn Host, target: &L2Address, action: &Action) -> ProgramResult {
    let engine = check_some(
        host.voting_engine(target),
        CrossvoteProgramError::UnknownVotingEngine,
    )?;
    msg!("Forwarding {} to voting engine", action.entrypoint());

    match action {
        Action::Propose {
            author,
            metadata_uri,
            execution_strategy,
            user_proposal_validation_params,
            ..
        } => engine.propose(
            *author,
            metadata_uri,
            execution_strategy,
            user_proposal_validation_params,
        ),
        Action::UpdateProposal {
            author,
            proposal_id,
            execution_strategy,
            metadata_uri,
            ..
        } => engine.update_proposal(*author, *proposal_id, execution_strategy, metadata_uri),
        Action::Vote {
            voter,
            proposal_id,
            choice,
            user_voting_strategies,
            metadata_uri,
        } => engine.vote(
            *voter,
            *proposal_id,
            *choice,
            user_voting_strategies,
            metadata_uri,
        ),
    }
}
