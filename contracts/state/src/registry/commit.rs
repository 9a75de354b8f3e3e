//! One-shot commitments relayed from L1.

use crossvote_interface::{Felt, L1Address};
use pinocchio::program_error::ProgramError;

use crate::storage::{read, write, DataKey, Storage};
use crate::{CrossvoteAuthenticateError, CrossvoteStateError};

pub struct CommitRegistry<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> CommitRegistry<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }

    /// Records a commitment from `sender`. Recording an existing commitment
    /// again leaves a single live entry.
    pub fn record(&mut self, sender: L1Address, payload_hash: Felt) -> Result<(), ProgramError> {
        let key = DataKey::Commit {
            sender,
            payload_hash,
        };
        if self.storage.contains(&key) {
            return Ok(());
        }
        write(self.storage, key, &true)?;

        let count = self.outstanding(&payload_hash)?;
        let count = count
            .checked_add(1)
            .ok_or(CrossvoteStateError::ArithmeticOverflow)?;
        write(self.storage, DataKey::CommitCount(payload_hash), &count)
    }

    /// Consumes the commitment of `sender` for `payload_hash`.
    ///
    /// Fails with `CommitNotFound` when nobody committed to the payload and
    /// with `InvalidSenderAddress` when only other senders did.
    pub fn consume(&mut self, sender: &L1Address, payload_hash: &Felt) -> Result<(), ProgramError> {
        let key = DataKey::Commit {
            sender: *sender,
            payload_hash: *payload_hash,
        };
        if !self.storage.contains(&key) {
            return match self.outstanding(payload_hash)? {
                0 => Err(CrossvoteAuthenticateError::CommitNotFound.into()),
                _ => Err(CrossvoteAuthenticateError::InvalidSenderAddress.into()),
            };
        }
        self.storage.remove(&key);

        let count_key = DataKey::CommitCount(*payload_hash);
        let count = self
            .outstanding(payload_hash)?
            .checked_sub(1)
            .ok_or(CrossvoteStateError::ArithmeticOverflow)?;
        if count == 0 {
            self.storage.remove(&count_key);
            Ok(())
        } else {
            write(self.storage, count_key, &count)
        }
    }

    pub fn is_committed(&self, sender: &L1Address, payload_hash: &Felt) -> bool {
        self.storage.contains(&DataKey::Commit {
            sender: *sender,
            payload_hash: *payload_hash,
        })
    }

    /// Number of live commitments to `payload_hash` across all senders.
    pub fn outstanding(&self, payload_hash: &Felt) -> Result<u64, ProgramError> {
        Ok(read::<u64>(&*self.storage, &DataKey::CommitCount(*payload_hash))?.unwrap_or(0))
    }
}
