use crossvote_interface::{Action, Felt, L1Address, L2Address};
use crossvote_program::AuthenticatorConfig;
use crossvote_program::CrossvoteInstruction;
use crossvote_state::{ActionMessage, Domain, TypedStruct};

use crate::basic::actions::AuthenticateBuilder;
use crate::basic::session::{RegisterSessionBuilder, RevokeSessionBuilder};
use crate::core::constants::{DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION};

/// Client view of a deployed authenticator.
#[derive(Debug, Clone)]
pub struct CrossvoteAuthenticator {
    /// Address of the authenticator contract
    pub address: L2Address,

    /// Domain every typed message is signed under
    pub domain: Domain,
}

impl CrossvoteAuthenticator {
    pub fn new(address: L2Address, chain_id: Felt) -> Self {
        Self {
            address,
            domain: Domain::new(DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION, chain_id, address),
        }
    }

    pub fn from_config(config: &AuthenticatorConfig) -> Self {
        Self {
            address: config.address,
            domain: config.domain.clone(),
        }
    }

    /// Struct hash of `action` on `target` as this authenticator computes it.
    pub fn action_hash(&self, target: &L2Address, action: &Action) -> [u8; 32] {
        ActionMessage {
            authenticator: &self.address,
            target,
            action,
        }
        .struct_hash()
    }

    pub fn authenticate(&self, target: L2Address, action: Action) -> AuthenticateBuilder<'_> {
        AuthenticateBuilder::new(self, target, action)
    }

    pub fn register_session(&self) -> RegisterSessionBuilder<'_> {
        RegisterSessionBuilder::new(self)
    }

    pub fn revoke_session(&self) -> RevokeSessionBuilder<'_> {
        RevokeSessionBuilder::new(self)
    }
}

/// What an L1 sender submits to the commit contract, and the instruction to
/// send once the commitment has been relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub sender: L1Address,
    pub payload_hash: Felt,
    pub instruction: CrossvoteInstruction,
}
