//! Session key lifecycle instruction handlers
//!
//! Owners register and revoke keys either with a signature over the
//! corresponding typed message or with a commitment relayed from L1. A key
//! may also revoke itself. Signed variants consume their salt in the owner's
//! salt scope, shared with action salts.

use crossvote_assertions::check_condition;
use crossvote_interface::{Felt, L1Address, UserAddress};
use crossvote_state::authority::{verify_l2_signature, SIGNATURE_LENGTH};
use crossvote_state::payload::{register_session_payload_hash, revoke_session_payload_hash};
use crossvote_state::{
    CommitRegistry, CrossvoteAuthenticateError, RegisterSessionMessage, RevokeSessionMessage,
    SaltRegistry, SessionKeyRegistry, SignatureProof, Storage, TypedStruct,
};
use pinocchio::{msg, ProgramResult};

use crate::auth::{verify_signature_proof, AuthContext};
use crate::{AuthenticatorConfig, Host};

fn register(
    config: &AuthenticatorConfig,
    host: &dyn Host,
    storage: &mut dyn Storage,
    owner: &UserAddress,
    session_public_key: &[u8; 32],
    duration: u64,
) -> ProgramResult {
    let record = SessionKeyRegistry::new(storage).register(
        owner,
        session_public_key,
        duration,
        host.block_timestamp(),
        config.max_session_duration,
    )?;
    msg!("Session key registered until {}", record.expires_at);
    Ok(())
}

fn revoke(
    storage: &mut dyn Storage,
    owner: &UserAddress,
    session_public_key: &[u8; 32],
) -> ProgramResult {
    SessionKeyRegistry::new(storage).revoke(owner, session_public_key)?;
    msg!("Session key revoked");
    Ok(())
}

pub fn process_register_session_with_owner_sig(
    config: &AuthenticatorConfig,
    host: &dyn Host,
    storage: &mut dyn Storage,
    owner: UserAddress,
    session_public_key: [u8; 32],
    duration: u64,
    salt: Felt,
    proof: &SignatureProof,
) -> ProgramResult {
    let struct_hash = RegisterSessionMessage {
        authenticator: &config.address,
        owner: &owner,
        session_public_key: &session_public_key,
        duration,
        salt: &salt,
    }
    .struct_hash();
    {
        let ctx = AuthContext {
            config,
            host,
            storage: &mut *storage,
        };
        verify_signature_proof(&ctx, &owner, &struct_hash, proof)?;
    }
    SaltRegistry::new(&mut *storage).check_and_consume(&owner, &salt)?;
    register(config, host, storage, &owner, &session_public_key, duration)
}

pub fn process_register_session_with_owner_tx(
    config: &AuthenticatorConfig,
    host: &dyn Host,
    storage: &mut dyn Storage,
    owner: L1Address,
    session_public_key: [u8; 32],
    duration: u64,
) -> ProgramResult {
    let payload_hash =
        register_session_payload_hash(&config.address, &owner, &session_public_key, duration);
    CommitRegistry::new(&mut *storage).consume(&owner, &payload_hash)?;
    register(
        config,
        host,
        storage,
        &UserAddress::L1(owner),
        &session_public_key,
        duration,
    )
}

pub fn process_revoke_session_with_owner_sig(
    config: &AuthenticatorConfig,
    host: &dyn Host,
    storage: &mut dyn Storage,
    owner: UserAddress,
    session_public_key: [u8; 32],
    salt: Felt,
    proof: &SignatureProof,
) -> ProgramResult {
    let struct_hash = RevokeSessionMessage {
        authenticator: &config.address,
        owner: &owner,
        session_public_key: &session_public_key,
        salt: &salt,
    }
    .struct_hash();
    {
        let ctx = AuthContext {
            config,
            host,
            storage: &mut *storage,
        };
        verify_signature_proof(&ctx, &owner, &struct_hash, proof)?;
    }
    SaltRegistry::new(&mut *storage).check_and_consume(&owner, &salt)?;
    revoke(storage, &owner, &session_public_key)
}

pub fn process_revoke_session_with_owner_tx(
    config: &AuthenticatorConfig,
    storage: &mut dyn Storage,
    owner: L1Address,
    session_public_key: [u8; 32],
) -> ProgramResult {
    let payload_hash = revoke_session_payload_hash(&config.address, &owner, &session_public_key);
    CommitRegistry::new(&mut *storage).consume(&owner, &payload_hash)?;
    revoke(storage, &UserAddress::L1(owner), &session_public_key)
}

pub fn process_revoke_session_with_session_key_sig(
    config: &AuthenticatorConfig,
    storage: &mut dyn Storage,
    owner: UserAddress,
    session_public_key: [u8; 32],
    salt: Felt,
    signature: &[u8],
) -> ProgramResult {
    if SessionKeyRegistry::new(&mut *storage)
        .get(&owner, &session_public_key)?
        .is_none()
    {
        msg!("Session key not registered for owner");
        return Err(CrossvoteAuthenticateError::SessionKeyNotFound.into());
    }
    check_condition(
        signature.len() == SIGNATURE_LENGTH,
        CrossvoteAuthenticateError::InvalidAuthorityPayload,
    )?;

    let struct_hash = RevokeSessionMessage {
        authenticator: &config.address,
        owner: &owner,
        session_public_key: &session_public_key,
        salt: &salt,
    }
    .struct_hash();
    if !verify_l2_signature(&config.domain, &struct_hash, signature, &session_public_key) {
        msg!("Session key signature rejected");
        return Err(CrossvoteAuthenticateError::InvalidSignature.into());
    }

    SaltRegistry::new(&mut *storage).check_and_consume(&owner, &salt)?;
    revoke(storage, &owner, &session_public_key)
}
