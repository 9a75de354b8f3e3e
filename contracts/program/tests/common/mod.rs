#![allow(dead_code)]

use std::collections::BTreeMap;

use crossvote_interface::{
    felt_from_u64, short_string_felts, Action, Choice, Felt, IndexedStrategy, L1Address,
    L2Address, Strategy, UserAddress, VotingEngine, VotingEngineError, U256,
};
use crossvote_program::{process_instruction, AuthenticatorConfig, CrossvoteInstruction, Host};
use crossvote_state::typed_data::{l1_digest, l2_digest};
use crossvote_state::{ActionMessage, Domain, L1Signature, MemoryStorage, TypedStruct};
use ed25519_dalek::{Signer, SigningKey};
use pinocchio::ProgramResult;

pub const AUTHENTICATOR: L2Address = [0xa0; 32];
pub const SPACE: L2Address = [0x5a; 32];
pub const L1_COMMIT_CONTRACT: L1Address = [0xcc; 20];
pub const CHAIN_ID: u64 = 0x534e5f4d41494e;
pub const START_TIME: u64 = 1_700_000_000;
pub const MAX_SESSION: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Propose {
        author: UserAddress,
        metadata_uri: Vec<Felt>,
        execution_strategy: Strategy,
        user_proposal_validation_params: Vec<Felt>,
    },
    UpdateProposal {
        author: UserAddress,
        proposal_id: U256,
        execution_strategy: Strategy,
        metadata_uri: Vec<Felt>,
    },
    Vote {
        voter: UserAddress,
        proposal_id: U256,
        choice: Choice,
        user_voting_strategies: Vec<IndexedStrategy>,
        metadata_uri: Vec<Felt>,
    },
}

/// Voting engine that records every call it accepts.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<EngineCall>,
    pub fail_with: Option<VotingEngineError>,
}

impl RecordingEngine {
    fn accept(&mut self, call: EngineCall) -> ProgramResult {
        if let Some(error) = self.fail_with {
            return Err(error.into());
        }
        self.calls.push(call);
        Ok(())
    }
}

impl VotingEngine for RecordingEngine {
    fn propose(
        &mut self,
        author: UserAddress,
        metadata_uri: &[Felt],
        execution_strategy: &Strategy,
        user_proposal_validation_params: &[Felt],
    ) -> ProgramResult {
        self.accept(EngineCall::Propose {
            author,
            metadata_uri: metadata_uri.to_vec(),
            execution_strategy: execution_strategy.clone(),
            user_proposal_validation_params: user_proposal_validation_params.to_vec(),
        })
    }

    fn update_proposal(
        &mut self,
        author: UserAddress,
        proposal_id: U256,
        execution_strategy: &Strategy,
        metadata_uri: &[Felt],
    ) -> ProgramResult {
        self.accept(EngineCall::UpdateProposal {
            author,
            proposal_id,
            execution_strategy: execution_strategy.clone(),
            metadata_uri: metadata_uri.to_vec(),
        })
    }

    fn vote(
        &mut self,
        voter: UserAddress,
        proposal_id: U256,
        choice: Choice,
        user_voting_strategies: &[IndexedStrategy],
        metadata_uri: &[Felt],
    ) -> ProgramResult {
        self.accept(EngineCall::Vote {
            voter,
            proposal_id,
            choice,
            user_voting_strategies: user_voting_strategies.to_vec(),
            metadata_uri: metadata_uri.to_vec(),
        })
    }
}

pub struct TestHost {
    pub now: u64,
    pub l1_origin: Option<L1Address>,
    pub engine: RecordingEngine,
    /// Contract accounts and the one signature each accepts
    pub contract_accounts: BTreeMap<L2Address, Vec<u8>>,
}

impl Host for TestHost {
    fn block_timestamp(&self) -> u64 {
        self.now
    }

    fn l1_message_origin(&self) -> Option<L1Address> {
        self.l1_origin
    }

    fn voting_engine(&mut self, target: &L2Address) -> Option<&mut dyn VotingEngine> {
        if *target != SPACE {
            return None;
        }
        let engine: &mut dyn VotingEngine = &mut self.engine;
        Some(engine)
    }

    fn validate_account_signature(
        &self,
        account: &L2Address,
        _hash: &[u8; 32],
        signature: &[u8],
    ) -> Option<bool> {
        self.contract_accounts
            .get(account)
            .map(|accepted| accepted.as_slice() == signature)
    }
}

pub struct TestEnv {
    pub config: AuthenticatorConfig,
    pub host: TestHost,
    pub storage: MemoryStorage,
}

pub fn setup_env() -> TestEnv {
    let config = AuthenticatorConfig::new(AUTHENTICATOR, felt_from_u64(CHAIN_ID))
        .with_l1_commit_contract(L1_COMMIT_CONTRACT)
        .with_max_session_duration(MAX_SESSION);
    TestEnv {
        config,
        host: TestHost {
            now: START_TIME,
            l1_origin: None,
            engine: RecordingEngine::default(),
            contract_accounts: BTreeMap::new(),
        },
        storage: MemoryStorage::new(),
    }
}

impl TestEnv {
    pub fn process(&mut self, instruction: &CrossvoteInstruction) -> ProgramResult {
        let data = instruction.pack()?;
        process_instruction(&self.config, &mut self.host, &mut self.storage, &data)
    }

    /// Delivers a commitment the way the L1 bridge does.
    pub fn relay_commit(&mut self, sender: L1Address, payload_hash: Felt) -> ProgramResult {
        self.host.l1_origin = Some(L1_COMMIT_CONTRACT);
        let result = self.process(&CrossvoteInstruction::RecordCommit {
            sender,
            payload_hash,
        });
        self.host.l1_origin = None;
        result
    }

    pub fn advance(&mut self, seconds: u64) {
        self.host.now += seconds;
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.host.engine.calls
    }

    pub fn domain(&self) -> &Domain {
        &self.config.domain
    }

    pub fn action_hash(&self, action: &Action) -> [u8; 32] {
        ActionMessage {
            authenticator: &AUTHENTICATOR,
            target: &SPACE,
            action,
        }
        .struct_hash()
    }
}

pub struct L1Key {
    secret: libsecp256k1::SecretKey,
    pub address: L1Address,
}

impl L1Key {
    pub fn new(seed: u8) -> Self {
        let secret = libsecp256k1::SecretKey::parse(&[seed; 32]).unwrap();
        let public = libsecp256k1::PublicKey::from_secret_key(&secret);
        let address = crossvote_state::authority::l1_address_from_public_key(&public);
        Self { secret, address }
    }

    pub fn user(&self) -> UserAddress {
        UserAddress::L1(self.address)
    }

    pub fn sign(&self, domain: &Domain, struct_hash: &[u8; 32]) -> L1Signature {
        let digest = l1_digest(domain, struct_hash);
        let (signature, recovery_id) =
            libsecp256k1::sign(&libsecp256k1::Message::parse(&digest), &self.secret);
        let mut rsv = [0u8; 65];
        rsv[..64].copy_from_slice(&signature.serialize());
        rsv[64] = recovery_id.serialize() + 27;
        L1Signature::from_rsv(&rsv)
    }
}

pub struct L2Key {
    signing_key: SigningKey,
}

impl L2Key {
    pub fn new(seed: u8) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&[seed; 32]),
        }
    }

    pub fn address(&self) -> L2Address {
        self.signing_key.verifying_key().to_bytes()
    }

    pub fn user(&self) -> UserAddress {
        UserAddress::L2(self.address())
    }

    pub fn sign(&self, domain: &Domain, struct_hash: &[u8; 32]) -> Vec<u8> {
        let digest = l2_digest(domain, &self.address(), struct_hash);
        self.signing_key.sign(&digest).to_bytes().to_vec()
    }
}

pub fn propose_action(author: UserAddress, salt: u64) -> Action {
    Action::Propose {
        author,
        metadata_uri: short_string_felts("ipfs://QmProposalMetadata"),
        execution_strategy: Strategy {
            address: [0xee; 32],
            params: vec![felt_from_u64(1), felt_from_u64(2)],
        },
        user_proposal_validation_params: vec![],
        salt: felt_from_u64(salt),
    }
}

pub fn update_proposal_action(author: UserAddress, salt: u64) -> Action {
    Action::UpdateProposal {
        author,
        proposal_id: U256::from_u128(1),
        execution_strategy: Strategy {
            address: [0xee; 32],
            params: vec![],
        },
        metadata_uri: short_string_felts("ipfs://QmUpdated"),
        salt: felt_from_u64(salt),
    }
}

pub fn vote_action(voter: UserAddress, choice: Choice) -> Action {
    Action::Vote {
        voter,
        proposal_id: U256::from_u128(1),
        choice,
        user_voting_strategies: vec![IndexedStrategy {
            index: 0,
            params: vec![],
        }],
        metadata_uri: vec![],
    }
}
