use pinocchio::program_error::ProgramError;
use thiserror::Error;

/// Error types related to authentication operations.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CrossvoteAuthenticateError {
    /// Signature does not verify against the claimed signer or session key
    #[error("Invalid signature")]
    InvalidSignature = 3000,
    /// No unconsumed commitment matches the recomputed payload hash
    #[error("Commit not found")]
    CommitNotFound,
    /// A commitment for the payload exists but was recorded by another sender
    #[error("Invalid sender address")]
    InvalidSenderAddress,
    /// The (author, salt) pair already authorized an action
    #[error("Salt already used")]
    SaltAlreadyUsed,
    /// Session key is past its expiry timestamp
    #[error("Session key expired")]
    SessionKeyExpired,
    /// Session key was revoked by its owner
    #[error("Session key revoked")]
    SessionKeyRevoked,
    /// Session key was never registered for this owner
    #[error("Session key not found")]
    SessionKeyNotFound,
    /// Requested session duration is zero, too long, or overflows
    #[error("Invalid session duration")]
    InvalidSessionDuration,
    /// Session key signature is not exactly 64 bytes
    #[error("Invalid authority payload")]
    InvalidAuthorityPayload,
    /// Proof scheme does not match the kind of the claimed address
    #[error("Invalid author type")]
    InvalidAuthorType,
    /// Relay message did not originate from the trusted L1 contract
    #[error("Invalid message source")]
    InvalidMessageSource,
}

impl From<CrossvoteAuthenticateError> for ProgramError {
    fn from(e: CrossvoteAuthenticateError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

/// Error types related to state management operations.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CrossvoteStateError {
    /// Stored value could not be decoded
    #[error("Invalid storage data")]
    InvalidStorageData = 2000,
    /// A counter over- or underflowed
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<CrossvoteStateError> for ProgramError {
    fn from(e: CrossvoteStateError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
