//! Instruction handlers.

pub mod authenticate;
pub mod record_commit;
pub mod session;

pub use authenticate::*;
pub use record_commit::*;
pub use session::*;
