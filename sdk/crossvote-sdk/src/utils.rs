use crossvote_interface::{Action, Felt, L1Address, L2Address};
use crossvote_state::payload::{
    action_payload_hash, register_session_payload_hash, revoke_session_payload_hash,
};

/// Random salt that fits a field element.
pub fn random_salt() -> Felt {
    let mut salt: Felt = rand::random();
    salt[0] &= 0x03;
    salt
}

/// Payload hash an L1 sender passes to the commit contract to authorize
/// `action` on `target`.
pub fn commit_payload_for_action(target: &L2Address, action: &Action) -> Felt {
    action_payload_hash(target, action)
}

pub fn commit_payload_for_register_session(
    authenticator: &L2Address,
    owner: &L1Address,
    session_public_key: &[u8; 32],
    duration: u64,
) -> Felt {
    register_session_payload_hash(authenticator, owner, session_public_key, duration)
}

pub fn commit_payload_for_revoke_session(
    authenticator: &L2Address,
    owner: &L1Address,
    session_public_key: &[u8; 32],
) -> Felt {
    revoke_session_payload_hash(authenticator, owner, session_public_key)
}
