//! Typed-message codec.
//!
//! Builds the canonical, domain-separated hash of an action so an off-chain
//! signer and the authenticator agree on it byte for byte. Struct hashing
//! follows the EIP-712 rules: `keccak(typeHash ‖ encodeData)`, with dynamic
//! arrays and nested structs replaced by their own hashes.

use crossvote_interface::{
    felt_from_u128, felt_from_u64, Action, Felt, IndexedStrategy, L2Address, Strategy,
    UserAddress, U256,
};

use crate::hash::{keccak256, keccak256_words};

pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,uint256 verifyingContract)";
pub const STRATEGY_TYPE: &str = "Strategy(uint256 address,uint256[] params)";
pub const INDEXED_STRATEGY_TYPE: &str = "IndexedStrategy(uint8 index,uint256[] params)";
pub const U256_TYPE: &str = "u256(uint128 low,uint128 high)";

pub const PROPOSE_TYPE: &str = "Propose(uint256 authenticator,uint256 space,uint256 author,\
uint256[] metadataUri,Strategy executionStrategy,uint256[] userProposalValidationParams,\
uint256 salt)Strategy(uint256 address,uint256[] params)";

pub const UPDATE_PROPOSAL_TYPE: &str = "UpdateProposal(uint256 authenticator,uint256 space,\
uint256 author,u256 proposalId,Strategy executionStrategy,uint256[] metadataUri,uint256 salt)\
Strategy(uint256 address,uint256[] params)u256(uint128 low,uint128 high)";

pub const VOTE_TYPE: &str = "Vote(uint256 authenticator,uint256 space,uint256 voter,\
u256 proposalId,uint128 choice,IndexedStrategy[] userVotingStrategies,uint256[] metadataUri)\
IndexedStrategy(uint8 index,uint256[] params)u256(uint128 low,uint128 high)";

pub const REGISTER_SESSION_KEY_TYPE: &str = "RegisterSessionKey(uint256 authenticator,\
uint256 owner,uint256 sessionPublicKey,uint256 sessionDuration,uint256 salt)";

pub const REVOKE_SESSION_KEY_TYPE: &str =
    "RevokeSessionKey(uint256 authenticator,uint256 owner,uint256 sessionPublicKey,uint256 salt)";

/// Prefix of the L2 message digest.
pub const L2_MESSAGE_PREFIX: &[u8] = b"L2 Message";

/// Binds struct hashes to one deployment on one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub name: String,
    pub version: String,
    pub chain_id: Felt,
    pub verifying_contract: L2Address,
}

impl Domain {
    pub fn new(name: &str, version: &str, chain_id: Felt, verifying_contract: L2Address) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            chain_id,
            verifying_contract,
        }
    }

    pub fn separator(&self) -> [u8; 32] {
        keccak256_words(&[
            type_hash(DOMAIN_TYPE),
            keccak256(self.name.as_bytes()),
            keccak256(self.version.as_bytes()),
            self.chain_id,
            self.verifying_contract,
        ])
    }
}

/// A value with an EIP-712 style struct hash.
pub trait TypedStruct {
    fn struct_hash(&self) -> [u8; 32];
}

pub fn type_hash(type_string: &str) -> [u8; 32] {
    keccak256(type_string.as_bytes())
}

/// Hash of a `uint256[]` member. Empty arrays hash to `keccak("")`.
pub fn hash_felt_array(values: &[Felt]) -> [u8; 32] {
    keccak256_words(values)
}

/// Hash of an array of structs: keccak over the member struct hashes.
pub fn hash_struct_array<T: TypedStruct>(values: &[T]) -> [u8; 32] {
    let hashes: Vec<[u8; 32]> = values.iter().map(TypedStruct::struct_hash).collect();
    keccak256_words(&hashes)
}

impl TypedStruct for Strategy {
    fn struct_hash(&self) -> [u8; 32] {
        keccak256_words(&[
            type_hash(STRATEGY_TYPE),
            self.address,
            hash_felt_array(&self.params),
        ])
    }
}

impl TypedStruct for IndexedStrategy {
    fn struct_hash(&self) -> [u8; 32] {
        keccak256_words(&[
            type_hash(INDEXED_STRATEGY_TYPE),
            felt_from_u64(self.index as u64),
            hash_felt_array(&self.params),
        ])
    }
}

impl TypedStruct for U256 {
    fn struct_hash(&self) -> [u8; 32] {
        keccak256_words(&[
            type_hash(U256_TYPE),
            felt_from_u128(self.low),
            felt_from_u128(self.high),
        ])
    }
}

/// An action bound to the authenticator that verifies it and the voting
/// engine ("space") it targets.
#[derive(Debug, Clone, Copy)]
pub struct ActionMessage<'a> {
    pub authenticator: &'a L2Address,
    pub target: &'a L2Address,
    pub action: &'a Action,
}

impl TypedStruct for ActionMessage<'_> {
    fn struct_hash(&self) -> [u8; 32] {
        match self.action {
            Action::Propose {
                author,
                metadata_uri,
                execution_strategy,
                user_proposal_validation_params,
                salt,
            } => keccak256_words(&[
                type_hash(PROPOSE_TYPE),
                *self.authenticator,
                *self.target,
                author.to_word(),
                hash_felt_array(metadata_uri),
                execution_strategy.struct_hash(),
                hash_felt_array(user_proposal_validation_params),
                *salt,
            ]),
            Action::UpdateProposal {
                author,
                proposal_id,
                execution_strategy,
                metadata_uri,
                salt,
            } => keccak256_words(&[
                type_hash(UPDATE_PROPOSAL_TYPE),
                *self.authenticator,
                *self.target,
                author.to_word(),
                proposal_id.struct_hash(),
                execution_strategy.struct_hash(),
                hash_felt_array(metadata_uri),
                *salt,
            ]),
            Action::Vote {
                voter,
                proposal_id,
                choice,
                user_voting_strategies,
                metadata_uri,
            } => keccak256_words(&[
                type_hash(VOTE_TYPE),
                *self.authenticator,
                *self.target,
                voter.to_word(),
                proposal_id.struct_hash(),
                felt_from_u64(*choice as u64),
                hash_struct_array(user_voting_strategies),
                hash_felt_array(metadata_uri),
            ]),
        }
    }
}

/// Owner authorization to delegate to a session key.
#[derive(Debug, Clone, Copy)]
pub struct RegisterSessionMessage<'a> {
    pub authenticator: &'a L2Address,
    pub owner: &'a UserAddress,
    pub session_public_key: &'a [u8; 32],
    pub duration: u64,
    pub salt: &'a Felt,
}

impl TypedStruct for RegisterSessionMessage<'_> {
    fn struct_hash(&self) -> [u8; 32] {
        keccak256_words(&[
            type_hash(REGISTER_SESSION_KEY_TYPE),
            *self.authenticator,
            self.owner.to_word(),
            *self.session_public_key,
            felt_from_u64(self.duration),
            *self.salt,
        ])
    }
}

/// Authorization to revoke a session key, signed by its owner or by the key.
#[derive(Debug, Clone, Copy)]
pub struct RevokeSessionMessage<'a> {
    pub authenticator: &'a L2Address,
    pub owner: &'a UserAddress,
    pub session_public_key: &'a [u8; 32],
    pub salt: &'a Felt,
}

impl TypedStruct for RevokeSessionMessage<'_> {
    fn struct_hash(&self) -> [u8; 32] {
        keccak256_words(&[
            type_hash(REVOKE_SESSION_KEY_TYPE),
            *self.authenticator,
            self.owner.to_word(),
            *self.session_public_key,
            *self.salt,
        ])
    }
}

/// Digest an L1 wallet signs for `struct_hash` (`0x1901` structured data).
pub fn l1_digest(domain: &Domain, struct_hash: &[u8; 32]) -> [u8; 32] {
    let separator = domain.separator();
    crate::hash::keccak256_concat(&[&[0x19, 0x01], &separator, struct_hash])
}

/// Digest an L2 key signs for `struct_hash`. The signer word binds the
/// digest to the signing account or session key.
pub fn l2_digest(domain: &Domain, signer: &Felt, struct_hash: &[u8; 32]) -> [u8; 32] {
    let separator = domain.separator();
    crate::hash::keccak256_concat(&[L2_MESSAGE_PREFIX, &separator, signer, struct_hash])
}
