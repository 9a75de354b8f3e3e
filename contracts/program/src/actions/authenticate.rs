//! Authenticate-and-forward instruction handlers

use crossvote_interface::{Action, L2Address};
use crossvote_state::{SaltRegistry, SignatureProof, Storage};
use pinocchio::{msg, ProgramResult};

use crate::auth::{
    AuthContext, Authenticator, L1CommitAuthenticator, L1SignatureAuthenticator,
    L2SignatureAuthenticator, SessionKeyAuthenticator, SessionProof,
};
use crate::{dispatch, AuthenticatorConfig, Host};

/// Runs `authenticator`, consumes the salt if the scheme requires it, and
/// forwards the action. Salt consumption is the last state change before
/// dispatch.
pub fn process_authenticate<A: Authenticator>(
    config: &AuthenticatorConfig,
    host: &mut dyn Host,
    storage: &mut dyn Storage,
    authenticator: &A,
    target: &L2Address,
    action: &Action,
    proof: &A::Proof,
) -> ProgramResult {
    let identity = {
        let mut ctx = AuthContext {
            config,
            host: &*host,
            storage: &mut *storage,
        };
        authenticator.authenticate(&mut ctx, target, action, proof)?
    };
    msg!(
        "Authenticated {} via {:?}",
        action.entrypoint(),
        authenticator.scheme()
    );

    if authenticator.scheme().consumes_salt() {
        if let Some(salt) = action.salt() {
            SaltRegistry::new(storage).check_and_consume(&identity, salt)?;
        }
    }

    dispatch::forward(host, target, action)
}

pub fn process_authenticate_with_signature(
    config: &AuthenticatorConfig,
    host: &mut dyn Host,
    storage: &mut dyn Storage,
    target: &L2Address,
    action: &Action,
    proof: &SignatureProof,
) -> ProgramResult {
    match proof {
        SignatureProof::L1(signature) => process_authenticate(
            config,
            host,
            storage,
            &L1SignatureAuthenticator,
            target,
            action,
            signature,
        ),
        SignatureProof::L2(signature) => process_authenticate(
            config,
            host,
            storage,
            &L2SignatureAuthenticator,
            target,
            action,
            signature,
        ),
    }
}

pub fn process_authenticate_with_session_key(
    config: &AuthenticatorConfig,
    host: &mut dyn Host,
    storage: &mut dyn Storage,
    target: &L2Address,
    action: &Action,
    session_public_key: [u8; 32],
    signature: Vec<u8>,
) -> ProgramResult {
    let proof = SessionProof {
        session_public_key,
        signature,
    };
    process_authenticate(
        config,
        host,
        storage,
        &SessionKeyAuthenticator,
        target,
        action,
        &proof,
    )
}

pub fn process_authenticate_with_commit(
    config: &AuthenticatorConfig,
    host: &mut dyn Host,
    storage: &mut dyn Storage,
    target: &L2Address,
    action: &Action,
) -> ProgramResult {
    process_authenticate(
        config,
        host,
        storage,
        &L1CommitAuthenticator,
        target,
        action,
        &(),
    )
}
