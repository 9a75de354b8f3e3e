//! Deployment parameters of one authenticator instance.

use crossvote_interface::{Felt, L1Address, L2Address};
use crossvote_state::Domain;

pub const DEFAULT_DOMAIN_NAME: &str = "crossvote";
pub const DEFAULT_DOMAIN_VERSION: &str = "1";

/// Thirty days.
pub const DEFAULT_MAX_SESSION_DURATION: u64 = 30 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatorConfig {
    /// Address of the authenticator itself, bound into every signed message
    pub address: L2Address,
    pub domain: Domain,
    /// Only commitments relayed from this L1 contract are recorded
    pub l1_commit_contract: L1Address,
    pub max_session_duration: u64,
}

impl AuthenticatorConfig {
    pub fn new(address: L2Address, chain_id: Felt) -> Self {
        Self {
            address,
            domain: Domain::new(DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION, chain_id, address),
            l1_commit_contract: [0u8; 20],
            max_session_duration: DEFAULT_MAX_SESSION_DURATION,
        }
    }

    pub fn with_domain(mut self, name: &str, version: &str) -> Self {
        self.domain = Domain::new(name, version, self.domain.chain_id, self.address);
        self
    }

    pub fn with_l1_commit_contract(mut self, l1_commit_contract: L1Address) -> Self {
        self.l1_commit_contract = l1_commit_contract;
        self
    }

    pub fn with_max_session_duration(mut self, max_session_duration: u64) -> Self {
        self.max_session_duration = max_session_duration;
        self
    }
}
