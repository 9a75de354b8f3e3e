#![allow(dead_code)]

use crossvote_interface::{
    felt_from_u64, Choice, Felt, IndexedStrategy, L1Address, L2Address, Strategy, UserAddress,
    VotingEngine, U256,
};
use crossvote_program::{process_instruction, AuthenticatorConfig, CrossvoteInstruction, Host};
use crossvote_sdk::advanced::instructions::{pack, record_commit};
use crossvote_sdk::{CommitRequest, CrossvoteAuthenticator};
use crossvote_state::MemoryStorage;
use pinocchio::ProgramResult;

pub const AUTHENTICATOR: L2Address = [0xa0; 32];
pub const SPACE: L2Address = [0x5a; 32];
pub const L1_COMMIT_CONTRACT: L1Address = [0xcc; 20];

/// Engine that only counts forwarded actions per entrypoint.
#[derive(Debug, Default)]
pub struct CountingEngine {
    pub proposals: Vec<UserAddress>,
    pub updates: Vec<(UserAddress, U256)>,
    pub votes: Vec<(UserAddress, Choice)>,
}

impl VotingEngine for CountingEngine {
    fn propose(
        &mut self,
        author: UserAddress,
        _metadata_uri: &[Felt],
        _execution_strategy: &Strategy,
        _user_proposal_validation_params: &[Felt],
    ) -> ProgramResult {
        self.proposals.push(author);
        Ok(())
    }

    fn update_proposal(
        &mut self,
        author: UserAddress,
        proposal_id: U256,
        _execution_strategy: &Strategy,
        _metadata_uri: &[Felt],
    ) -> ProgramResult {
        self.updates.push((author, proposal_id));
        Ok(())
    }

    fn vote(
        &mut self,
        voter: UserAddress,
        _proposal_id: U256,
        choice: Choice,
        _user_voting_strategies: &[IndexedStrategy],
        _metadata_uri: &[Felt],
    ) -> ProgramResult {
        self.votes.push((voter, choice));
        Ok(())
    }
}

pub struct SimHost {
    pub now: u64,
    pub l1_origin: Option<L1Address>,
    pub engine: CountingEngine,
}

impl Host for SimHost {
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
}

pub struct Chain {
    pub config: AuthenticatorConfig,
    pub host: SimHost,
    pub storage: MemoryStorage,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            config: AuthenticatorConfig::new(AUTHENTICATOR, felt_from_u64(1))
                .with_l1_commit_contract(L1_COMMIT_CONTRACT),
            host: SimHost {
                now: 1_000,
                l1_origin: None,
                engine: CountingEngine::default(),
            },
            storage: MemoryStorage::new(),
        }
    }

    pub fn client(&self) -> CrossvoteAuthenticator {
        CrossvoteAuthenticator::from_config(&self.config)
    }

    pub fn send(&mut self, instruction: &CrossvoteInstruction) -> ProgramResult {
        let data = pack(instruction)
            .map_err(|_| pinocchio::program_error::ProgramError::InvalidInstructionData)?;
        process_instruction(&self.config, &mut self.host, &mut self.storage, &data)
    }

    /// Commits on L1, relays through the bridge, then sends the follow-up
    /// instruction.
    pub fn commit_and_send(&mut self, request: &CommitRequest) -> ProgramResult {
        self.host.l1_origin = Some(L1_COMMIT_CONTRACT);
        let relayed = self.send(&record_commit(request.sender, request.payload_hash));
        self.host.l1_origin = None;
        relayed?;
        self.send(&request.instruction)
    }
}
