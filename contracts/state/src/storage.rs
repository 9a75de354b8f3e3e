//! Contract storage model.
//!
//! All authenticator state lives in a single key-value store addressed by
//! [`DataKey`]. Values are borsh encoded. Instructions run against a
//! [`StorageTransaction`] overlay so that a failed call leaves the underlying
//! storage untouched.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use crossvote_interface::{Felt, L1Address, UserAddress};
use pinocchio::program_error::ProgramError;

use crate::CrossvoteStateError;

/// Storage slots owned by the authenticator.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DataKey {
    /// Commitment relayed from L1 for `(sender, payload_hash)`
    Commit {
        sender: L1Address,
        payload_hash: Felt,
    },
    /// Number of outstanding commitments for a payload hash across senders
    CommitCount(Felt),
    /// Salt already consumed by an author
    UsedSalt { author: UserAddress, salt: Felt },
    /// Session key delegated by an owner
    SessionKey {
        owner: UserAddress,
        session_public_key: [u8; 32],
    },
}

/// Raw key-value access to contract storage.
pub trait Storage {
    fn get(&self, key: &DataKey) -> Option<Vec<u8>>;

    fn set(&mut self, key: DataKey, value: Vec<u8>);

    fn remove(&mut self, key: &DataKey);

    fn contains(&self, key: &DataKey) -> bool {
        self.get(key).is_some()
    }
}

/// Reads and decodes a value.
pub fn read<T: BorshDeserialize>(
    storage: &dyn Storage,
    key: &DataKey,
) -> Result<Option<T>, ProgramError> {
    match storage.get(key) {
        Some(bytes) => T::try_from_slice(&bytes)
            .map(Some)
            .map_err(|_| CrossvoteStateError::InvalidStorageData.into()),
        None => Ok(None),
    }
}

/// Encodes and writes a value.
pub fn write<T: BorshSerialize>(
    storage: &mut dyn Storage,
    key: DataKey,
    value: &T,
) -> Result<(), ProgramError> {
    let bytes = borsh::to_vec(value).map_err(|_| CrossvoteStateError::InvalidStorageData)?;
    storage.set(key, bytes);
    Ok(())
}

/// In-memory storage backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<DataKey, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &DataKey) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: DataKey, value: Vec<u8>) {
        self.entries.insert(key, value);
    }

    fn remove(&mut self, key: &DataKey) {
        self.entries.remove(key);
    }
}

/// Write overlay over a base storage.
///
/// Reads see pending writes first. Nothing reaches the base until
/// [`StorageTransaction::commit`]; dropping the overlay discards every write.
pub struct StorageTransaction<'a> {
    base: &'a mut dyn Storage,
    // `None` marks a pending removal
    pending: BTreeMap<DataKey, Option<Vec<u8>>>,
}

impl<'a> StorageTransaction<'a> {
    pub fn new(base: &'a mut dyn Storage) -> Self {
        Self {
            base,
            pending: BTreeMap::new(),
        }
    }

    /// Number of keys touched so far.
    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }

    /// Applies all pending writes to the base storage.
    pub fn commit(self) {
        let StorageTransaction { base, pending } = self;
        for (key, value) in pending {
            match value {
                Some(bytes) => base.set(key, bytes),
                None => base.remove(&key),
            }
        }
    }
}

impl Storage for StorageTransaction<'_> {
    fn get(&self, key: &DataKey) -> Option<Vec<u8>> {
        match self.pending.get(key) {
            Some(value) => value.clone(),
            None => self.base.get(key),
        }
    }

    fn set(&mut self, key: DataKey, value: Vec<u8>) {
        self.pending.insert(key, Some(value));
    }

    fn remove(&mut self, key: &DataKey) {
        self.pending.insert(key.clone(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salt_key(byte: u8) -> DataKey {
        DataKey::UsedSalt {
            author: UserAddress::L2([byte; 32]),
            salt: [byte; 32],
        }
    }

    #[test]
    fn test_transaction_reads_its_own_writes() {
        let mut base = MemoryStorage::new();
        let mut tx = StorageTransaction::new(&mut base);
        write(&mut tx, salt_key(1), &true).unwrap();
        assert_eq!(read::<bool>(&tx, &salt_key(1)).unwrap(), Some(true));
    }

    #[test]
    fn test_dropped_transaction_leaves_base_untouched() {
        let mut base = MemoryStorage::new();
        write(&mut base, salt_key(1), &true).unwrap();
        {
            let mut tx = StorageTransaction::new(&mut base);
            tx.remove(&salt_key(1));
            write(&mut tx, salt_key(2), &true).unwrap();
            assert!(!tx.contains(&salt_key(1)));
        }
        assert!(base.contains(&salt_key(1)));
        assert!(!base.contains(&salt_key(2)));
    }

    #[test]
    fn test_commit_applies_writes_and_removals() {
        let mut base = MemoryStorage::new();
        write(&mut base, salt_key(1), &true).unwrap();
        let mut tx = StorageTransaction::new(&mut base);
        tx.remove(&salt_key(1));
        write(&mut tx, salt_key(2), &true).unwrap();
        assert_eq!(tx.pending_writes(), 2);
        tx.commit();
        assert!(!base.contains(&salt_key(1)));
        assert!(base.contains(&salt_key(2)));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let mut base = MemoryStorage::new();
        base.set(salt_key(1), vec![7, 7, 7]);
        assert_eq!(
            read::<u64>(&base, &salt_key(1)),
            Err(CrossvoteStateError::InvalidStorageData.into())
        );
    }
}
