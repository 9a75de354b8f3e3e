//! Session key delegation.
//!
//! A record moves `absent -> active -> (expired | revoked)`. Registering again
//! replaces the record, which is the only way back to active.

use borsh::{BorshDeserialize, BorshSerialize};
use crossvote_assertions::{check_at_most, check_checked_add, check_nonzero, check_not_expired};
use crossvote_interface::UserAddress;
use pinocchio::{msg, program_error::ProgramError};

use crate::storage::{read, write, DataKey, Storage};
use crate::CrossvoteAuthenticateError;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKeyRecord {
    pub registered_at: u64,
    /// First timestamp at which the key is no longer accepted
    pub expires_at: u64,
    pub revoked: bool,
}

pub struct SessionKeyRegistry<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> SessionKeyRegistry<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }

    fn key(owner: &UserAddress, session_public_key: &[u8; 32]) -> DataKey {
        DataKey::SessionKey {
            owner: *owner,
            session_public_key: *session_public_key,
        }
    }

    pub fn get(
        &self,
        owner: &UserAddress,
        session_public_key: &[u8; 32],
    ) -> Result<Option<SessionKeyRecord>, ProgramError> {
        read(&*self.storage, &Self::key(owner, session_public_key))
    }

    /// Registers `session_public_key` for `owner` until `now + duration`,
    /// replacing any previous record.
    pub fn register(
        &mut self,
        owner: &UserAddress,
        session_public_key: &[u8; 32],
        duration: u64,
        now: u64,
        max_duration: u64,
    ) -> Result<SessionKeyRecord, ProgramError> {
        check_nonzero(duration, CrossvoteAuthenticateError::InvalidSessionDuration)?;
        check_at_most(duration, max_duration, CrossvoteAuthenticateError::InvalidSessionDuration)?;
        let expires_at =
            check_checked_add(now, duration, CrossvoteAuthenticateError::InvalidSessionDuration)?;

        let record = SessionKeyRecord {
            registered_at: now,
            expires_at,
            revoked: false,
        };
        write(self.storage, Self::key(owner, session_public_key), &record)?;
        Ok(record)
    }

    /// Marks the key revoked. Revoking twice is a no-op.
    pub fn revoke(
        &mut self,
        owner: &UserAddress,
        session_public_key: &[u8; 32],
    ) -> Result<(), ProgramError> {
        let Some(mut record) = self.get(owner, session_public_key)? else {
            msg!("Session key not registered for {:?}", owner);
            return Err(CrossvoteAuthenticateError::SessionKeyNotFound.into());
        };
        if record.revoked {
            return Ok(());
        }
        record.revoked = true;
        write(self.storage, Self::key(owner, session_public_key), &record)
    }

    /// Returns the record if the key may act for `owner` at `now`.
    pub fn validate(
        &self,
        owner: &UserAddress,
        session_public_key: &[u8; 32],
        now: u64,
    ) -> Result<SessionKeyRecord, ProgramError> {
        let Some(record) = self.get(owner, session_public_key)? else {
            return Err(CrossvoteAuthenticateError::SessionKeyNotFound.into());
        };
        if record.revoked {
            return Err(CrossvoteAuthenticateError::SessionKeyRevoked.into());
        }
        check_not_expired(now, record.expires_at, CrossvoteAuthenticateError::SessionKeyExpired)?;
        Ok(record)
    }
}
