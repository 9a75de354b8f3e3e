use crossvote_interface::{
    short_string_felts, Action, Choice, Felt, IndexedStrategy, L2Address, Strategy, UserAddress,
    U256,
};
use crossvote_program::CrossvoteInstruction;

use crate::advanced::instructions;
use crate::basic::authenticator::{CommitRequest, CrossvoteAuthenticator};
use crate::core::signer::{CrossvoteSigner, SessionSigner};
use crate::error::{CrossvoteSdkError, Result};
use crate::utils::{commit_payload_for_action, random_salt};

pub struct ProposeBuilder {
    author: Option<UserAddress>,
    metadata_uri: Vec<Felt>,
    execution_strategy: Strategy,
    user_proposal_validation_params: Vec<Felt>,
    salt: Option<Felt>,
}

impl ProposeBuilder {
    pub fn new() -> Self {
        Self {
            author: None,
            metadata_uri: Vec::new(),
            execution_strategy: Strategy::default(),
            user_proposal_validation_params: Vec::new(),
            salt: None,
        }
    }

    pub fn with_author(mut self, author: UserAddress) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_metadata_uri(mut self, uri: &str) -> Self {
        self.metadata_uri = short_string_felts(uri);
        self
    }

    pub fn with_execution_strategy(mut self, strategy: Strategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    pub fn with_validation_params(mut self, params: Vec<Felt>) -> Self {
        self.user_proposal_validation_params = params;
        self
    }

    pub fn with_salt(mut self, salt: Felt) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Builds the action. A random salt is drawn if none was set.
    pub fn build(self) -> Result<Action> {
        Ok(Action::Propose {
            author: self.author.ok_or(CrossvoteSdkError::MissingField("author"))?,
            metadata_uri: self.metadata_uri,
            execution_strategy: self.execution_strategy,
            user_proposal_validation_params: self.user_proposal_validation_params,
            salt: self.salt.unwrap_or_else(random_salt),
        })
    }
}

pub struct UpdateProposalBuilder {
    author: Option<UserAddress>,
    proposal_id: Option<U256>,
    execution_strategy: Strategy,
    metadata_uri: Vec<Felt>,
    salt: Option<Felt>,
}

impl UpdateProposalBuilder {
    pub fn new() -> Self {
        Self {
            author: None,
            proposal_id: None,
            execution_strategy: Strategy::default(),
            metadata_uri: Vec::new(),
            salt: None,
        }
    }

    pub fn with_author(mut self, author: UserAddress) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_proposal_id(mut self, proposal_id: U256) -> Self {
        self.proposal_id = Some(proposal_id);
        self
    }

    pub fn with_execution_strategy(mut self, strategy: Strategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    pub fn with_metadata_uri(mut self, uri: &str) -> Self {
        self.metadata_uri = short_string_felts(uri);
        self
    }

    pub fn with_salt(mut self, salt: Felt) -> Self {
        self.salt = Some(salt);
        self
    }

    pub fn build(self) -> Result<Action> {
        Ok(Action::UpdateProposal {
            author: self.author.ok_or(CrossvoteSdkError::MissingField("author"))?,
            proposal_id: self
                .proposal_id
                .ok_or(CrossvoteSdkError::MissingField("proposal_id"))?,
            execution_strategy: self.execution_strategy,
            metadata_uri: self.metadata_uri,
            salt: self.salt.unwrap_or_else(random_salt),
        })
    }
}

pub struct VoteBuilder {
    voter: Option<UserAddress>,
    proposal_id: Option<U256>,
    choice: Choice,
    user_voting_strategies: Vec<IndexedStrategy>,
    metadata_uri: Vec<Felt>,
}

impl VoteBuilder {
    pub fn new() -> Self {
        Self {
            voter: None,
            proposal_id: None,
            choice: Choice::For,
            user_voting_strategies: Vec::new(),
            metadata_uri: Vec::new(),
        }
    }

    pub fn with_voter(mut self, voter: UserAddress) -> Self {
        self.voter = Some(voter);
        self
    }

    pub fn with_proposal_id(mut self, proposal_id: U256) -> Self {
        self.proposal_id = Some(proposal_id);
        self
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choice = choice;
        self
    }

    pub fn with_strategy(mut self, index: u8, params: Vec<Felt>) -> Self {
        self.user_voting_strategies
            .push(IndexedStrategy { index, params });
        self
    }

    pub fn with_metadata_uri(mut self, uri: &str) -> Self {
        self.metadata_uri = short_string_felts(uri);
        self
    }

    pub fn build(self) -> Result<Action> {
        Ok(Action::Vote {
            voter: self.voter.ok_or(CrossvoteSdkError::MissingField("voter"))?,
            proposal_id: self
                .proposal_id
                .ok_or(CrossvoteSdkError::MissingField("proposal_id"))?,
            choice: self.choice,
            user_voting_strategies: self.user_voting_strategies,
            metadata_uri: self.metadata_uri,
        })
    }
}

/// Turns an action into an authenticator instruction under one of the
/// schemes.
pub struct AuthenticateBuilder<'a> {
    authenticator: &'a CrossvoteAuthenticator,
    target: L2Address,
    action: Action,
}

impl<'a> AuthenticateBuilder<'a> {
    pub fn new(
        authenticator: &'a CrossvoteAuthenticator,
        target: L2Address,
        action: Action,
    ) -> Self {
        Self {
            authenticator,
            target,
            action,
        }
    }

    /// Direct signature by the author or voter.
    pub fn sign(self, signer: &dyn CrossvoteSigner) -> Result<CrossvoteInstruction> {
        if signer.identity() != *self.action.claimed_identity() {
            return Err(CrossvoteSdkError::SignerMismatch("action author"));
        }
        let struct_hash = self.authenticator.action_hash(&self.target, &self.action);
        let proof = signer.sign_struct(&self.authenticator.domain, &struct_hash);
        Ok(instructions::authenticate_with_signature(
            self.target,
            self.action,
            proof,
        ))
    }

    /// Signature by a session key delegated by the author or voter.
    pub fn sign_with_session(self, session: &SessionSigner) -> Result<CrossvoteInstruction> {
        if session.owner() != *self.action.claimed_identity() {
            return Err(CrossvoteSdkError::SignerMismatch("session owner"));
        }
        let struct_hash = self.authenticator.action_hash(&self.target, &self.action);
        let signature = session.sign_struct(&self.authenticator.domain, &struct_hash);
        Ok(instructions::authenticate_with_session_key(
            self.target,
            self.action,
            session.public_key(),
            signature,
        ))
    }

    /// Commitment path. Only L1 authors can commit.
    pub fn commit(self) -> Result<CommitRequest> {
        let sender = *self
            .action
            .claimed_identity()
            .as_l1()
            .ok_or(CrossvoteSdkError::SignerMismatch("L1 author"))?;
        let payload_hash = commit_payload_for_action(&self.target, &self.action);
        Ok(CommitRequest {
            sender,
            payload_hash,
            instruction: instructions::authenticate_with_commit(self.target, self.action),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossvote_interface::felt_from_u64;

    #[test]
    fn test_builders_require_identity() {
        assert!(matches!(
            ProposeBuilder::new().build(),
            Err(CrossvoteSdkError::MissingField("author"))
        ));
        assert!(matches!(
            VoteBuilder::new()
                .with_voter(UserAddress::L1([1u8; 20]))
                .build(),
            Err(CrossvoteSdkError::MissingField("proposal_id"))
        ));
    }

    #[test]
    fn test_explicit_salt_is_kept() {
        let action = ProposeBuilder::new()
            .with_author(UserAddress::L1([1u8; 20]))
            .with_salt(felt_from_u64(42))
            .build()
            .unwrap();
        assert_eq!(action.salt(), Some(&felt_from_u64(42)));
    }

    #[test]
    fn test_commit_requires_l1_author() {
        let authenticator = CrossvoteAuthenticator::new([1u8; 32], felt_from_u64(1));
        let action = VoteBuilder::new()
            .with_voter(UserAddress::L2([2u8; 32]))
            .with_proposal_id(U256::from_u128(1))
            .build()
            .unwrap();
        assert!(authenticator.authenticate([3u8; 32], action).commit().is_err());
    }
}
