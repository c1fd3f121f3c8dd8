//! # Two-Key Controller
//!
//! Dual-signer gate in front of the wELCASH token. Once the token's
//! ownership is handed to this contract, minting and ownership transfer only
//! happen when both configured signers agree.
//!
//! ## How It Works
//! 1. [`TwoKeyController::init`] binds the controller to a token and exactly
//!    two distinct signers.
//! 2. A signer proposes a mint or an ownership change. Each signer has one
//!    slot per action kind, so a new proposal replaces the previous one.
//! 3. The *other* signer confirms with identical parameters; the controller
//!    clears the slot and calls the token as its owner.
//! 4. A proposer can revoke their pending proposal at any time before it is
//!    confirmed.
//!
//! ## Safety Guarantees
//! - No single signer can mint or move ownership: self-confirmation is
//!   rejected.
//! - A proposal executes at most once; its slot is emptied before the token
//!   is called and confirmations hold a reentrancy lock.
//! - A token-side failure (e.g. supply cap) aborts the whole confirmation,
//!   leaving the proposal in place.

#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod error;
mod events;
mod mint;
mod ownership;
mod reentrancy;
mod signers;
mod storage;
mod token;

pub use error::ControllerError;
pub use events::{
    MintConfirmedEvent, MintProposedEvent, MintRevokedEvent, OwnershipChangeConfirmedEvent,
    OwnershipChangeProposedEvent, OwnershipChangeRevokedEvent,
};
pub use storage::{MintProposal, SignerPair, SignerSlot};
pub use token::TokenAdminClient;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod ownership_test;

#[contract]
pub struct TwoKeyController;

#[contractimpl]
impl TwoKeyController {
    /// Bind the controller to `token` and its two signers
    ///
    /// # Errors
    /// - `InvalidSignerCount` - `signers` is not two distinct addresses
    /// - `AlreadyInitialized` - called more than once
    pub fn init(env: Env, token: Address, signers: Vec<Address>) -> Result<(), ControllerError> {
        if storage::is_initialized(&env) {
            return Err(ControllerError::AlreadyInitialized);
        }
        let pair = SignerPair::from_signers(&signers)?;

        storage::write_token(&env, &token);
        storage::write_signers(&env, &pair);
        log!(&env, "two-key controller for {}", token);
        Ok(())
    }

    /// Propose minting `amount` to `recipient`
    ///
    /// Replaces any pending mint proposal of `signer`. The amount is not
    /// validated here; the token checks it when the proposal is confirmed.
    ///
    /// # Errors
    /// - `NotASigner` - `signer` is not one of the two signers
    pub fn propose_mint(
        env: Env,
        signer: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), ControllerError> {
        mint::propose_mint(&env, signer, recipient, amount)
    }

    /// Confirm `proposer`'s mint proposal and execute it on a match
    ///
    /// # Arguments
    /// * `signer` - The confirming signer (must authorize, must not be `proposer`)
    /// * `proposer` - Signer whose slot is confirmed
    /// * `recipient` - Must equal the proposed recipient
    /// * `amount` - Must equal the proposed amount
    ///
    /// # Returns
    /// `true` if tokens were minted, `false` if nothing matched
    ///
    /// # Errors
    /// - `NotASigner` - `signer` or `proposer` is not a signer
    /// - `SelfConfirmationNotAllowed` - `signer` equals `proposer`
    /// - `SupplyCapExceeded` - the token's supply cap would be passed
    /// - `TokenRejected` - the token refused the mint
    pub fn confirm_mint_proposal(
        env: Env,
        signer: Address,
        proposer: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<bool, ControllerError> {
        mint::confirm_mint_proposal(&env, signer, proposer, recipient, amount)
    }

    /// Drop `signer`'s pending mint proposal
    ///
    /// # Errors
    /// - `NotASigner` - `signer` is not a signer
    /// - `NoProposalToRevoke` - slot is empty
    pub fn revoke_mint_proposal(env: Env, signer: Address) -> Result<(), ControllerError> {
        mint::revoke_mint_proposal(&env, signer)
    }

    /// Propose handing token ownership to `new_owner`
    ///
    /// # Errors
    /// - `NotASigner` - `signer` is not one of the two signers
    pub fn propose_ownership_change(
        env: Env,
        signer: Address,
        new_owner: Address,
    ) -> Result<(), ControllerError> {
        ownership::propose_ownership_change(&env, signer, new_owner)
    }

    /// Confirm `proposer`'s ownership change and execute it on a match
    ///
    /// # Returns
    /// `true` if ownership moved, `false` if nothing matched
    ///
    /// # Errors
    /// - `NotASigner` - `signer` or `proposer` is not a signer
    /// - `SelfConfirmationNotAllowed` - `signer` equals `proposer`
    /// - `TokenRejected` - the token refused the ownership transfer
    pub fn confirm_ownership_change(
        env: Env,
        signer: Address,
        proposer: Address,
        new_owner: Address,
    ) -> Result<bool, ControllerError> {
        ownership::confirm_ownership_change(&env, signer, proposer, new_owner)
    }

    /// Drop `signer`'s pending ownership change
    ///
    /// # Errors
    /// - `NotASigner` - `signer` is not a signer
    /// - `NoProposalToRevoke` - slot is empty
    pub fn revoke_ownership_change_proposal(
        env: Env,
        signer: Address,
    ) -> Result<(), ControllerError> {
        ownership::revoke_ownership_change_proposal(&env, signer)
    }

    /// Pending mint of `signer`, `None` when the slot is empty.
    pub fn mint_proposal(env: Env, signer: Address) -> Option<MintProposal> {
        let slot = storage::read_signers(&env).ok()?.slot_of(&signer)?;
        storage::read_mint_proposal(&env, slot)
    }

    /// Pending ownership change of `signer`, `None` when the slot is empty.
    pub fn ownership_change_proposal(env: Env, signer: Address) -> Option<Address> {
        let slot = storage::read_signers(&env).ok()?.slot_of(&signer)?;
        storage::read_ownership_proposal(&env, slot)
    }

    pub fn token(env: Env) -> Result<Address, ControllerError> {
        storage::read_token(&env)
    }

    pub fn signers(env: Env) -> Result<Vec<Address>, ControllerError> {
        Ok(storage::read_signers(&env)?.to_vec(&env))
    }

    pub fn is_signer(env: Env, addr: Address) -> bool {
        storage::read_signers(&env)
            .map(|pair| pair.slot_of(&addr).is_some())
            .unwrap_or(false)
    }
}
