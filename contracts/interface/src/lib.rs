//! Crossvote Voting Engine Interface
//!
//! This crate defines the types shared by the authenticator, its clients, and
//! the voting engine it forwards validated actions to.

pub mod engine;
pub mod felt;

use borsh::{BorshDeserialize, BorshSerialize};
use pinocchio::pubkey::Pubkey;

pub use engine::{VotingEngine, VotingEngineError};
pub use felt::{felt_from_u128, felt_from_u64, short_string_felts, Felt};

/// Address of an L1 account (20 bytes).
pub type L1Address = [u8; 20];

/// Address of an L2 account or contract (32 bytes).
pub type L2Address = Pubkey;

/// Identity of an author or voter, rooted on either layer.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UserAddress {
    L1(L1Address),
    L2(L2Address),
}

impl UserAddress {
    /// Calldata tag for L1 identities
    pub const L1_TAG: u64 = 0;
    /// Calldata tag for L2 identities
    pub const L2_TAG: u64 = 1;

    /// The address as a single 32-byte word. L1 addresses are left padded.
    pub fn to_word(&self) -> Felt {
        match self {
            UserAddress::L1(address) => {
                let mut word = [0u8; 32];
                word[12..].copy_from_slice(address);
                word
            },
            UserAddress::L2(address) => *address,
        }
    }

    pub fn tag(&self) -> u64 {
        match self {
            UserAddress::L1(_) => Self::L1_TAG,
            UserAddress::L2(_) => Self::L2_TAG,
        }
    }

    pub fn as_l1(&self) -> Option<&L1Address> {
        match self {
            UserAddress::L1(address) => Some(address),
            UserAddress::L2(_) => None,
        }
    }

    pub fn as_l2(&self) -> Option<&L2Address> {
        match self {
            UserAddress::L2(address) => Some(address),
            UserAddress::L1(_) => None,
        }
    }
}

/// 256-bit unsigned integer carried as a `{low, high}` pair.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct U256 {
    pub low: u128,
    pub high: u128,
}

impl U256 {
    pub const fn from_u128(low: u128) -> Self {
        Self { low, high: 0 }
    }

    /// Big-endian 32-byte encoding (high half first).
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&self.high.to_be_bytes());
        bytes[16..].copy_from_slice(&self.low.to_be_bytes());
        bytes
    }
}

/// An execution strategy: contract address plus opaque parameters.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Strategy {
    pub address: L2Address,
    pub params: Vec<Felt>,
}

/// A voting strategy selected by its index in the engine's strategy list.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedStrategy {
    pub index: u8,
    pub params: Vec<Felt>,
}

/// Vote choice. The discriminants are the wire tags.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum Choice {
    Against = 0,
    For = 1,
    Abstain = 2,
}

/// A governance action awaiting authentication.
///
/// Field order within each variant is the canonical order used by both hash
/// schemes and must not change.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Propose {
        author: UserAddress,
        metadata_uri: Vec<Felt>,
        execution_strategy: Strategy,
        user_proposal_validation_params: Vec<Felt>,
        salt: Felt,
    },
    UpdateProposal {
        author: UserAddress,
        proposal_id: U256,
        execution_strategy: Strategy,
        metadata_uri: Vec<Felt>,
        salt: Felt,
    },
    Vote {
        voter: UserAddress,
        proposal_id: U256,
        choice: Choice,
        user_voting_strategies: Vec<IndexedStrategy>,
        metadata_uri: Vec<Felt>,
    },
}

impl Action {
    /// The author or voter the action claims to be issued by.
    pub fn claimed_identity(&self) -> &UserAddress {
        match self {
            Action::Propose { author, .. } | Action::UpdateProposal { author, .. } => author,
            Action::Vote { voter, .. } => voter,
        }
    }

    /// The replay-protection salt. Votes carry none.
    pub fn salt(&self) -> Option<&Felt> {
        match self {
            Action::Propose { salt, .. } | Action::UpdateProposal { salt, .. } => Some(salt),
            Action::Vote { .. } => None,
        }
    }

    /// Name of the voting engine entrypoint this action is forwarded to.
    pub fn entrypoint(&self) -> &'static str {
        match self {
            Action::Propose { .. } => engine::PROPOSE_ENTRYPOINT,
            Action::UpdateProposal { .. } => engine::UPDATE_PROPOSAL_ENTRYPOINT,
            Action::Vote { .. } => engine::VOTE_ENTRYPOINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l1_address_word_is_left_padded() {
        let address = UserAddress::L1([0xab; 20]);
        let word = address.to_word();
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(&word[12..], &[0xab; 20]);
    }

    #[test]
    fn test_u256_big_endian_layout() {
        let value = U256 { low: 1, high: 2 };
        let bytes = value.to_be_bytes();
        assert_eq!(bytes[15], 2);
        assert_eq!(bytes[31], 1);
    }

    #[test]
    fn test_choice_wire_tags() {
        assert_eq!(borsh::to_vec(&Choice::Against).unwrap(), vec![0]);
        assert_eq!(borsh::to_vec(&Choice::Abstain).unwrap(), vec![2]);
        assert_eq!(Choice::try_from_slice(&[1]).unwrap(), Choice::For);
        assert!(Choice::try_from_slice(&[3]).is_err());
    }

    #[test]
    fn test_vote_has_no_salt() {
        let vote = Action::Vote {
            voter: UserAddress::L2([1; 32]),
            proposal_id: U256::from_u128(1),
            choice: Choice::For,
            user_voting_strategies: vec![],
            metadata_uri: vec![],
        };
        assert!(vote.salt().is_none());
        assert_eq!(vote.entrypoint(), "vote");
    }
}
