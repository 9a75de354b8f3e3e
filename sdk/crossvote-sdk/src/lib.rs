//! Client SDK for the Crossvote authenticator.
//!
//! Builds governance actions, signs them under any of the authenticator's
//! schemes, and computes the payload hashes L1 senders commit to.

pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::basic::actions::{
    AuthenticateBuilder, ProposeBuilder, UpdateProposalBuilder, VoteBuilder,
};
pub use crate::basic::authenticator::{CommitRequest, CrossvoteAuthenticator};
pub use crate::basic::session::{RegisterSessionBuilder, RevokeSessionBuilder};
pub use crate::core::signer::{CrossvoteSigner, L1Signer, L2Signer, SessionSigner};
pub use crate::error::{CrossvoteSdkError, Result};
pub use crate::utils::random_salt;

pub mod state {
    pub use crossvote_interface::{Action, Choice, Strategy, UserAddress, U256};
    pub use crossvote_state::{L1Signature, SignatureProof};
}
