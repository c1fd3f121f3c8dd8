//! # Dual-Signer Mint
//!
//! propose → confirm → mint.
//!
//! 1. A signer stores `{recipient, amount}` in their own slot with
//!    [`propose_mint`]. Proposing again overwrites the slot.
//! 2. The other signer repeats the exact parameters in
//!    [`confirm_mint_proposal`]. On a match the slot is cleared and the token
//!    mints with the controller as owner.
//! 3. Until then the proposer may drop it with [`revoke_mint_proposal`].
//!
//! A confirmation that does not match the stored proposal (or hits an empty
//! slot) mints nothing and returns `Ok(false)`.

use soroban_sdk::{log, Address, Env};

use crate::error::ControllerError;
use crate::events::{
    emit_mint_confirmed, emit_mint_proposed, emit_mint_revoked, MintConfirmedEvent,
    MintProposedEvent, MintRevokedEvent,
};
use crate::reentrancy::ReentrancyGuard;
use crate::signers::{require_confirmer, require_signer};
use crate::storage::{
    clear_mint_proposal, read_mint_proposal, read_token, write_mint_proposal, MintProposal,
};
use crate::token::{check_token_call, TokenAdminClient};

pub fn propose_mint(
    env: &Env,
    signer: Address,
    recipient: Address,
    amount: i128,
) -> Result<(), ControllerError> {
    let slot = require_signer(env, &signer)?;

    write_mint_proposal(
        env,
        slot,
        &MintProposal {
            recipient: recipient.clone(),
            amount,
        },
    );

    emit_mint_proposed(
        env,
        MintProposedEvent {
            proposer: signer,
            recipient,
            amount,
        },
    );
    Ok(())
}

/// Confirm `proposer`'s pending mint
///
/// # Returns
/// `true` when the mint executed, `false` when the parameters did not match
/// the pending proposal
///
/// # Errors
/// - `NotASigner` - `signer` or `proposer` is not a signer
/// - `SelfConfirmationNotAllowed` - `signer` is `proposer`
/// - `Reentrancy` - another confirmation is executing
/// - `SupplyCapExceeded` - the token refused to pass its supply cap
/// - `TokenRejected` - the token refused the mint for another reason
///
/// Any error rolls back the whole invocation, so the proposal stays pending.
pub fn confirm_mint_proposal(
    env: &Env,
    signer: Address,
    proposer: Address,
    recipient: Address,
    amount: i128,
) -> Result<bool, ControllerError> {
    let slot = require_confirmer(env, &signer, &proposer)?;
    let _guard = ReentrancyGuard::new(env)?;

    let expected = MintProposal {
        recipient: recipient.clone(),
        amount,
    };
    if read_mint_proposal(env, slot) != Some(expected) {
        log!(env, "confirm_mint_proposal: no matching proposal from {}", proposer);
        return Ok(false);
    }

    // Slot is cleared before the token call.
    clear_mint_proposal(env, slot);

    let token = read_token(env)?;
    check_token_call(TokenAdminClient::new(env, &token).try_mint(
        &env.current_contract_address(),
        &recipient,
        &amount,
    ))?;

    emit_mint_confirmed(
        env,
        MintConfirmedEvent {
            proposer,
            confirmer: signer,
            recipient,
            amount,
        },
    );
    Ok(true)
}

pub fn revoke_mint_proposal(env: &Env, signer: Address) -> Result<(), ControllerError> {
    let slot = require_signer(env, &signer)?;

    if read_mint_proposal(env, slot).is_none() {
        return Err(ControllerError::NoProposalToRevoke);
    }
    clear_mint_proposal(env, slot);

    emit_mint_revoked(env, MintRevokedEvent { proposer: signer });
    Ok(())
}
