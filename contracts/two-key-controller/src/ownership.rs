//! Dual-signer ownership transfer of the governed token. Same slot lifecycle
//! as [`crate::mint`], with a single proposed owner per slot.

use soroban_sdk::{log, Address, Env};

use crate::error::ControllerError;
use crate::events::{
    emit_ownership_change_confirmed, emit_ownership_change_proposed,
    emit_ownership_change_revoked, OwnershipChangeConfirmedEvent, OwnershipChangeProposedEvent,
    OwnershipChangeRevokedEvent,
};
use crate::reentrancy::ReentrancyGuard;
use crate::signers::{require_confirmer, require_signer};
use crate::storage::{
    clear_ownership_proposal, read_ownership_proposal, read_token, write_ownership_proposal,
};
use crate::token::{check_token_call, TokenAdminClient};

pub fn propose_ownership_change(
    env: &Env,
    signer: Address,
    new_owner: Address,
) -> Result<(), ControllerError> {
    let slot = require_signer(env, &signer)?;

    write_ownership_proposal(env, slot, &new_owner);

    emit_ownership_change_proposed(
        env,
        OwnershipChangeProposedEvent {
            proposer: signer,
            new_owner,
        },
    );
    Ok(())
}

/// Confirm `proposer`'s pending ownership change. Returns whether the token
/// ownership was transferred; a token refusal surfaces as `TokenRejected`.
pub fn confirm_ownership_change(
    env: &Env,
    signer: Address,
    proposer: Address,
    new_owner: Address,
) -> Result<bool, ControllerError> {
    let slot = require_confirmer(env, &signer, &proposer)?;
    let _guard = ReentrancyGuard::new(env)?;

    if read_ownership_proposal(env, slot).as_ref() != Some(&new_owner) {
        log!(
            env,
            "confirm_ownership_change: no matching proposal from {}",
            proposer
        );
        return Ok(false);
    }

    clear_ownership_proposal(env, slot);

    let token = read_token(env)?;
    check_token_call(
        TokenAdminClient::new(env, &token)
            .try_transfer_ownership(&env.current_contract_address(), &new_owner),
    )?;

    log!(env, "token ownership handed to {}", new_owner);
    emit_ownership_change_confirmed(
        env,
        OwnershipChangeConfirmedEvent {
            proposer,
            confirmer: signer,
            new_owner,
        },
    );
    Ok(true)
}

pub fn revoke_ownership_change_proposal(
    env: &Env,
    signer: Address,
) -> Result<(), ControllerError> {
    let slot = require_signer(env, &signer)?;

    if read_ownership_proposal(env, slot).is_none() {
        return Err(ControllerError::NoProposalToRevoke);
    }
    clear_ownership_proposal(env, slot);

    emit_ownership_change_revoked(env, OwnershipChangeRevokedEvent { proposer: signer });
    Ok(())
}
