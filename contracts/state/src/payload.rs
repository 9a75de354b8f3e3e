//! Commit payload encoding agreed with the L1 commit contract.
//!
//! A commitment is a flat hash over the target contract, the entrypoint
//! selector, and the call's calldata words. No typed-data envelope is
//! involved since no off-chain signature exists for this scheme.

use crossvote_interface::{
    felt_from_u128, felt_from_u64, Action, Felt, IndexedStrategy, L1Address, L2Address, Strategy,
    UserAddress, U256,
};

use crate::hash::{selector, sn_keccak_words};

pub const REGISTER_SESSION_ENTRYPOINT: &str = "register_session_key";
pub const REVOKE_SESSION_ENTRYPOINT: &str = "revoke_session_key";

/// Calldata as a sequence of words. Arrays are length prefixed, `U256`
/// values are `[low, high]`, and user addresses are `[tag, word]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calldata {
    words: Vec<Felt>,
}

impl Calldata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[Felt] {
        &self.words
    }

    pub fn push_felt(&mut self, felt: Felt) -> &mut Self {
        self.words.push(felt);
        self
    }

    pub fn push_u64(&mut self, value: u64) -> &mut Self {
        self.push_felt(felt_from_u64(value))
    }

    pub fn push_user_address(&mut self, address: &UserAddress) -> &mut Self {
        self.push_u64(address.tag()).push_felt(address.to_word())
    }

    pub fn push_u256(&mut self, value: &U256) -> &mut Self {
        self.push_felt(felt_from_u128(value.low))
            .push_felt(felt_from_u128(value.high))
    }

    pub fn push_felts(&mut self, felts: &[Felt]) -> &mut Self {
        self.push_u64(felts.len() as u64);
        self.words.extend_from_slice(felts);
        self
    }

    pub fn push_strategy(&mut self, strategy: &Strategy) -> &mut Self {
        self.push_felt(strategy.address).push_felts(&strategy.params)
    }

    pub fn push_indexed_strategies(&mut self, strategies: &[IndexedStrategy]) -> &mut Self {
        self.push_u64(strategies.len() as u64);
        for strategy in strategies {
            self.push_u64(strategy.index as u64)
                .push_felts(&strategy.params);
        }
        self
    }
}

/// Calldata of the voting engine call an action is forwarded as, salt
/// included.
pub fn action_calldata(action: &Action) -> Calldata {
    let mut calldata = Calldata::new();
    match action {
        Action::Propose {
            author,
            metadata_uri,
            execution_strategy,
            user_proposal_validation_params,
            salt,
        } => {
            calldata
                .push_user_address(author)
                .push_felts(metadata_uri)
                .push_strategy(execution_strategy)
                .push_felts(user_proposal_validation_params)
                .push_felt(*salt);
        },
        Action::UpdateProposal {
            author,
            proposal_id,
            execution_strategy,
            metadata_uri,
            salt,
        } => {
            calldata
                .push_user_address(author)
                .push_u256(proposal_id)
                .push_strategy(execution_strategy)
                .push_felts(metadata_uri)
                .push_felt(*salt);
        },
        Action::Vote {
            voter,
            proposal_id,
            choice,
            user_voting_strategies,
            metadata_uri,
        } => {
            calldata
                .push_user_address(voter)
                .push_u256(proposal_id)
                .push_u64(*choice as u64)
                .push_indexed_strategies(user_voting_strategies)
                .push_felts(metadata_uri);
        },
    }
    calldata
}

/// `sn_keccak(target ‖ selector ‖ calldata)`
pub fn commit_payload_hash(target: &L2Address, selector: &Felt, calldata: &[Felt]) -> Felt {
    let mut words = Vec::with_capacity(calldata.len() + 2);
    words.push(*target);
    words.push(*selector);
    words.extend_from_slice(calldata);
    sn_keccak_words(&words)
}

/// Payload hash an L1 sender commits to for `action` on `target`.
pub fn action_payload_hash(target: &L2Address, action: &Action) -> Felt {
    commit_payload_hash(
        target,
        &selector(action.entrypoint()),
        action_calldata(action).words(),
    )
}

/// Payload hash an L1 owner commits to for registering a session key on the
/// authenticator at `authenticator`.
pub fn register_session_payload_hash(
    authenticator: &L2Address,
    owner: &L1Address,
    session_public_key: &[u8; 32],
    duration: u64,
) -> Felt {
    let mut calldata = Calldata::new();
    calldata
        .push_user_address(&UserAddress::L1(*owner))
        .push_felt(*session_public_key)
        .push_u64(duration);
    commit_payload_hash(
        authenticator,
        &selector(REGISTER_SESSION_ENTRYPOINT),
        calldata.words(),
    )
}

/// Payload hash an L1 owner commits to for revoking a session key.
pub fn revoke_session_payload_hash(
    authenticator: &L2Address,
    owner: &L1Address,
    session_public_key: &[u8; 32],
) -> Felt {
    let mut calldata = Calldata::new();
    calldata
        .push_user_address(&UserAddress::L1(*owner))
        .push_felt(*session_public_key);
    commit_payload_hash(
        authenticator,
        &selector(REVOKE_SESSION_ENTRYPOINT),
        calldata.words(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossvote_interface::Choice;

    #[test]
    fn test_arrays_are_length_prefixed() {
        let mut calldata = Calldata::new();
        calldata.push_felts(&[[1u8; 32], [2u8; 32]]);
        assert_eq!(calldata.words().len(), 3);
        assert_eq!(calldata.words()[0], felt_from_u64(2));
    }

    #[test]
    fn test_vote_calldata_layout() {
        let action = Action::Vote {
            voter: UserAddress::L1([7u8; 20]),
            proposal_id: U256 { low: 5, high: 0 },
            choice: Choice::Abstain,
            user_voting_strategies: vec![IndexedStrategy {
                index: 3,
                params: vec![],
            }],
            metadata_uri: vec![],
        };
        let calldata = action_calldata(&action);
        let words = calldata.words();
        // tag, voter, low, high, choice, len, index, params len, uri len
        assert_eq!(words.len(), 9);
        assert_eq!(words[0], felt_from_u64(UserAddress::L1_TAG));
        assert_eq!(words[2], felt_from_u64(5));
        assert_eq!(words[4], felt_from_u64(2));
        assert_eq!(words[6], felt_from_u64(3));
    }

    #[test]
    fn test_selector_separates_entrypoints() {
        let target = [4u8; 32];
        let owner = [1u8; 20];
        let key = [2u8; 32];
        assert_ne!(
            register_session_payload_hash(&target, &owner, &key, 0),
            revoke_session_payload_hash(&target, &owner, &key)
        );
    }

    #[test]
    fn test_payload_hash_binds_target() {
        let action = Action::Vote {
            voter: UserAddress::L1([7u8; 20]),
            proposal_id: U256::from_u128(1),
            choice: Choice::For,
            user_voting_strategies: vec![],
            metadata_uri: vec![],
        };
        assert_ne!(
            action_payload_hash(&[1u8; 32], &action),
            action_payload_hash(&[2u8; 32], &action)
        );
    }
}
