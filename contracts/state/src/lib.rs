//! Crossvote State Module
//!
//! Storage, hashing, and verification primitives of the authenticator: the
//! typed-message codec, commit payload encoding, L1/L2 signature verifiers,
//! and the commit, salt, and session key registries.

pub mod authority;
pub mod error;
pub mod hash;
pub mod payload;
pub mod registry;
pub mod storage;
pub mod typed_data;

pub use authority::{L1Signature, SignatureProof};
pub use error::{CrossvoteAuthenticateError, CrossvoteStateError};
pub use registry::{CommitRegistry, SaltRegistry, SessionKeyRecord, SessionKeyRegistry};
pub use storage::{DataKey, MemoryStorage, Storage, StorageTransaction};
pub use typed_data::{
    ActionMessage, Domain, RegisterSessionMessage, RevokeSessionMessage, TypedStruct,
};
