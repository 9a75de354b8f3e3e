//! Per-author salt uniqueness.

use crossvote_interface::{Felt, UserAddress};
use pinocchio::{msg, program_error::ProgramError};

use crate::storage::{write, DataKey, Storage};
use crate::CrossvoteAuthenticateError;

pub struct SaltRegistry<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> SaltRegistry<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }

    /// Marks `(author, salt)` as used, failing if it already was.
    pub fn check_and_consume(
        &mut self,
        author: &UserAddress,
        salt: &Felt,
    ) -> Result<(), ProgramError> {
        let key = DataKey::UsedSalt {
            author: *author,
            salt: *salt,
        };
        if self.storage.contains(&key) {
            msg!("Salt already used by {:?}", author);
            return Err(CrossvoteAuthenticateError::SaltAlreadyUsed.into());
        }
        write(self.storage, key, &true)
    }

    pub fn is_used(&self, author: &UserAddress, salt: &Felt) -> bool {
        self.storage.contains(&DataKey::UsedSalt {
            author: *author,
            salt: *salt,
        })
    }
}
