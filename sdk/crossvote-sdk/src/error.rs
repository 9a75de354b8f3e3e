use pinocchio::program_error::ProgramError;
use thiserror::Error;

/// SDK-specific error types for Crossvote operations
#[derive(Debug, Error)]
pub enum CrossvoteSdkError {
    /// Secret key bytes are not a valid key
    #[error("Invalid secret key")]
    InvalidSecretKey,

    /// A builder was finalized without a required field
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// The signer cannot act for the requested identity
    #[error("Signer does not match {0}")]
    SignerMismatch(&'static str),

    /// Borsh serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] std::io::Error),

    /// Error reported by the authenticator
    #[error("Program error: {0:?}")]
    ProgramError(ProgramError),
}

impl From<ProgramError> for CrossvoteSdkError {
    fn from(e: ProgramError) -> Self {
        CrossvoteSdkError::ProgramError(e)
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, CrossvoteSdkError>;
