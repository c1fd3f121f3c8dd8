use soroban_sdk::{Address, Env};

use crate::error::ControllerError;
use crate::storage::{read_signers, SignerSlot};

/// Authorize `signer` and return its slot.
pub fn require_signer(env: &Env, signer: &Address) -> Result<SignerSlot, ControllerError> {
    signer.require_auth();
    read_signers(env)?
        .slot_of(signer)
        .ok_or(ControllerError::NotASigner)
}

/// Authorize a confirmation by `confirmer` of a proposal made by `proposer`
/// and return the proposer's slot. The confirmer must be the other signer.
pub fn require_confirmer(
    env: &Env,
    confirmer: &Address,
    proposer: &Address,
) -> Result<SignerSlot, ControllerError> {
    let confirmer_slot = require_signer(env, confirmer)?;
    let proposer_slot = read_signers(env)?
        .slot_of(proposer)
        .ok_or(ControllerError::NotASigner)?;
    if confirmer_slot == proposer_slot {
        return Err(ControllerError::SelfConfirmationNotAllowed);
    }
    Ok(proposer_slot)
}
