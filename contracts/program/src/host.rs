//! Execution environment seam.
//!
//! The chain the authenticator runs on supplies time, the origin of relayed
//! L1 messages, the voting engines actions are forwarded to, and signature
//! validation for contract accounts.

use crossvote_interface::{L1Address, L2Address, VotingEngine};

pub trait Host {
    /// Timestamp of the current block, in seconds.
    fn block_timestamp(&self) -> u64;

    /// Sender of the L1 message being delivered by the current transaction,
    /// or `None` when it is an ordinary L2 transaction.
    fn l1_message_origin(&self) -> Option<L1Address>;

    fn voting_engine(&mut self, target: &L2Address) -> Option<&mut dyn VotingEngine>;

    /// Asks the account at `account` to validate `signature` over `hash`.
    ///
    /// Returns `None` when `account` is a plain key pair, in which case the
    /// signature is checked as ed25519 against the address itself.
    fn validate_account_signature(
        &self,
        account: &L2Address,
        hash: &[u8; 32],
        signature: &[u8],
    ) -> Option<bool> {
        None
    }
}
