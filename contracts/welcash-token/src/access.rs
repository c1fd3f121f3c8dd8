//! # Access Control
//!
//! Owner-gated administration of the token: ownership transfer, the global
//! pause switch and the block list.
//!
//! The owner check is a pure comparison between the stored authority and the
//! caller passed to the entry point ([`authorize_owner`]); [`require_owner`]
//! adds the Soroban auth requirement and the storage lookup around it.
//!
//! Transfer-family calls go through [`ensure_transfer_allowed`], which applies
//! the pause flag first and then the block list to both the token source and
//! the initiating caller.

use soroban_sdk::{log, Address, Env};

use crate::error::TokenError;
use crate::events::{
    emit_ownership_transferred, emit_pause, emit_user_blocked, emit_user_unblocked,
    OwnershipTransferredEvent, PauseEvent, UserBlockedEvent, UserUnblockedEvent,
};
use crate::storage::{read_blocked, read_owner, read_paused, write_blocked, write_owner, write_paused};

/// Check `caller` against the stored authority identity.
pub fn authorize_owner(owner: &Address, caller: &Address) -> Result<(), TokenError> {
    if owner != caller {
        return Err(TokenError::NotOwner);
    }
    Ok(())
}

/// Require that `caller` signed the invocation and is the token owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();
    let owner = read_owner(env)?;
    authorize_owner(&owner, caller)
}

/// Reassign ownership to `new_owner` (owner only).
///
/// The new owner may be a contract, typically the two-key controller.
pub fn transfer_ownership(
    env: &Env,
    caller: Address,
    new_owner: Address,
) -> Result<(), TokenError> {
    require_owner(env, &caller)?;

    write_owner(env, &new_owner);

    log!(env, "transfer_ownership {} -> {}", caller, new_owner);
    emit_ownership_transferred(
        env,
        OwnershipTransferredEvent {
            previous_owner: caller,
            new_owner,
        },
    );
    Ok(())
}

/// Set the global pause flag (owner only)
///
/// # Arguments
/// * `caller` - Must be the owner
/// * `paused` - True to pause, false to unpause
pub fn set_paused(env: &Env, caller: Address, paused: bool) -> Result<(), TokenError> {
    require_owner(env, &caller)?;

    write_paused(env, paused);

    emit_pause(
        env,
        PauseEvent {
            paused,
            owner: caller,
        },
    );
    Ok(())
}

/// Add `user` to the block list. Blocking an already blocked user is a no-op
/// apart from the event.
pub fn block_user(env: &Env, caller: Address, user: Address) -> Result<(), TokenError> {
    require_owner(env, &caller)?;

    write_blocked(env, &user, true);

    log!(env, "block_user {}", user);
    emit_user_blocked(env, UserBlockedEvent { owner: caller, user });
    Ok(())
}

/// Remove `user` from the block list.
pub fn unblock_user(env: &Env, caller: Address, user: Address) -> Result<(), TokenError> {
    require_owner(env, &caller)?;

    write_blocked(env, &user, false);

    log!(env, "unblock_user {}", user);
    emit_user_unblocked(env, UserUnblockedEvent { owner: caller, user });
    Ok(())
}

pub fn is_blocked(env: &Env, user: &Address) -> bool {
    read_blocked(env, user)
}

pub fn is_paused(env: &Env) -> bool {
    read_paused(env)
}

/// Gate for transfer-family calls.
///
/// Rejects when paused, then when either the token source or the caller
/// that initiated the move is blocked. For a plain transfer both are the
/// same address.
pub fn ensure_transfer_allowed(
    env: &Env,
    initiator: &Address,
    source: &Address,
) -> Result<(), TokenError> {
    if read_paused(env) {
        return Err(TokenError::Paused);
    }
    if read_blocked(env, source) || read_blocked(env, initiator) {
        return Err(TokenError::UserBlocked);
    }
    Ok(())
}
