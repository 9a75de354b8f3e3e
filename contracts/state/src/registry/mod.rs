//! Replay-protection and delegation registries.
//!
//! Each registry is a thin typed view over [`Storage`](crate::storage::Storage)
//! slots. None of them checks signatures; callers authenticate first and
//! consume state last.

pub mod commit;
pub mod salt;
pub mod session;

pub use commit::CommitRegistry;
pub use salt::SaltRegistry;
pub use session::{SessionKeyRecord, SessionKeyRegistry};
