//! Crossvote Program
//!
//! Multi-scheme authenticator for a governance voting engine. Actions are
//! authorized by an L2 signature, an L1 signature, a commitment relayed from
//! L1, or a delegated session key, checked for replay, and forwarded to the
//! engine exactly once.

pub mod actions;
pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod instruction;
pub mod processor;

pub use auth::{AuthScheme, Authenticator};
pub use config::AuthenticatorConfig;
pub use error::CrossvoteProgramError;
pub use host::Host;
pub use instruction::CrossvoteInstruction;
pub use processor::process_instruction;
