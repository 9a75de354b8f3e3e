use crossvote_interface::{Felt, L1Address, UserAddress};
use crossvote_program::CrossvoteInstruction;
use crossvote_state::{RegisterSessionMessage, RevokeSessionMessage, TypedStruct};

use crate::advanced::instructions;
use crate::basic::authenticator::{CommitRequest, CrossvoteAuthenticator};
use crate::core::constants::DEFAULT_SESSION_DURATION;
use crate::core::signer::{CrossvoteSigner, SessionSigner};
use crate::error::{CrossvoteSdkError, Result};
use crate::utils::{
    commit_payload_for_register_session, commit_payload_for_revoke_session, random_salt,
};

pub struct RegisterSessionBuilder<'a> {
    authenticator: &'a CrossvoteAuthenticator,
    session_public_key: Option<[u8; 32]>,
    duration: u64,
    salt: Option<Felt>,
}

impl<'a> RegisterSessionBuilder<'a> {
    pub fn new(authenticator: &'a CrossvoteAuthenticator) -> Self {
        Self {
            authenticator,
            session_public_key: None,
            duration: DEFAULT_SESSION_DURATION,
            salt: None,
        }
    }

    pub fn with_session_key(mut self, session_public_key: [u8; 32]) -> Self {
        self.session_public_key = Some(session_public_key);
        self
    }

    /// Lifetime in seconds
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_salt(mut self, salt: Felt) -> Self {
        self.salt = Some(salt);
        self
    }

    fn session_key(&self) -> Result<[u8; 32]> {
        self.session_public_key
            .ok_or(CrossvoteSdkError::MissingField("session_public_key"))
    }

    /// Registration authorized by an owner signature.
    pub fn sign(self, owner: &dyn CrossvoteSigner) -> Result<CrossvoteInstruction> {
        let session_public_key = self.session_key()?;
        let salt = self.salt.unwrap_or_else(random_salt);
        let identity = owner.identity();
        let struct_hash = RegisterSessionMessage {
            authenticator: &self.authenticator.address,
            owner: &identity,
            session_public_key: &session_public_key,
            duration: self.duration,
            salt: &salt,
        }
        .struct_hash();
        let proof = owner.sign_struct(&self.authenticator.domain, &struct_hash);
        Ok(instructions::register_session_with_owner_sig(
            identity,
            session_public_key,
            self.duration,
            salt,
            proof,
        ))
    }

    /// Registration authorized by a commitment from the L1 owner.
    pub fn commit(self, owner: L1Address) -> Result<CommitRequest> {
        let session_public_key = self.session_key()?;
        Ok(CommitRequest {
            sender: owner,
            payload_hash: commit_payload_for_register_session(
                &self.authenticator.address,
                &owner,
                &session_public_key,
                self.duration,
            ),
            instruction: instructions::register_session_with_owner_tx(
                owner,
                session_public_key,
                self.duration,
            ),
        })
    }
}

pub struct RevokeSessionBuilder<'a> {
    authenticator: &'a CrossvoteAuthenticator,
    session_public_key: Option<[u8; 32]>,
    salt: Option<Felt>,
}

impl<'a> RevokeSessionBuilder<'a> {
    pub fn new(authenticator: &'a CrossvoteAuthenticator) -> Self {
        Self {
            authenticator,
            session_public_key: None,
            salt: None,
        }
    }

    pub fn with_session_key(mut self, session_public_key: [u8; 32]) -> Self {
        self.session_public_key = Some(session_public_key);
        self
    }

    pub fn with_salt(mut self, salt: Felt) -> Self {
        self.salt = Some(salt);
        self
    }

    fn struct_hash(
        &self,
        owner: &UserAddress,
        session_public_key: &[u8; 32],
        salt: &Felt,
    ) -> [u8; 32] {
        RevokeSessionMessage {
            authenticator: &self.authenticator.address,
            owner,
            session_public_key,
            salt,
        }
        .struct_hash()
    }

    /// Revocation authorized by an owner signature.
    pub fn sign(self, owner: &dyn CrossvoteSigner) -> Result<CrossvoteInstruction> {
        let session_public_key = self
            .session_public_key
            .ok_or(CrossvoteSdkError::MissingField("session_public_key"))?;
        let salt = self.salt.unwrap_or_else(random_salt);
        let identity = owner.identity();
        let struct_hash = self.struct_hash(&identity, &session_public_key, &salt);
        let proof = owner.sign_struct(&self.authenticator.domain, &struct_hash);
        Ok(instructions::revoke_session_with_owner_sig(
            identity,
            session_public_key,
            salt,
            proof,
        ))
    }

    /// Revocation signed by the session key itself.
    pub fn sign_with_session(self, session: &SessionSigner) -> Result<CrossvoteInstruction> {
        let session_public_key = session.public_key();
        let salt = self.salt.unwrap_or_else(random_salt);
        let owner = session.owner();
        let struct_hash = self.struct_hash(&owner, &session_public_key, &salt);
        let signature = session.sign_struct(&self.authenticator.domain, &struct_hash);
        Ok(instructions::revoke_session_with_session_key_sig(
            owner,
            session_public_key,
            salt,
            signature,
        ))
    }

    /// Revocation authorized by a commitment from the L1 owner.
    pub fn commit(self, owner: L1Address) -> Result<CommitRequest> {
        let session_public_key = self
            .session_public_key
            .ok_or(CrossvoteSdkError::MissingField("session_public_key"))?;
        Ok(CommitRequest {
            sender: owner,
            payload_hash: commit_payload_for_revoke_session(
                &self.authenticator.address,
                &owner,
                &session_public_key,
            ),
            instruction: instructions::revoke_session_with_owner_tx(owner, session_public_key),
        })
    }
}
