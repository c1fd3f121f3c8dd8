//! # wELCASH Token Contract
//!
//! Wrapped Electric Cash: a capped fungible token with 8 decimals whose
//! privileged operations (minting, block list, pause, ownership) are gated by
//! a single owner identity. The owner is usually the two-key controller
//! contract, which turns mint and ownership transfer into dual-signer
//! operations.
//!
//! ## Access layers
//! - **Owner**: every privileged entry point takes the caller explicitly and
//!   checks it against the stored owner.
//! - **Pause**: while paused, `transfer` and `transfer_from` fail.
//! - **Block list**: a blocked address can neither move its own funds nor
//!   initiate a delegated transfer, and cannot grant allowances.
//! - **Supply cap**: minting never pushes supply past 20,000,000 tokens.
//! - **Burn address**: a fixed address that is never credited; sending to it
//!   destroys supply.

#![no_std]
#![allow(deprecated)]
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod access;
mod balance;
mod error;
mod events;
mod metadata;
mod storage;

pub use access::authorize_owner;
pub use error::TokenError;
pub use events::{
    ApproveEvent, BurnEvent, MintEvent, OwnershipTransferredEvent, PauseEvent, TransferEvent,
    UserBlockedEvent, UserUnblockedEvent,
};
pub use metadata::{BURN_ADDRESS, DECIMALS, SUPPLY_CAP, TOKEN_NAME, TOKEN_SYMBOL};


#[contract]
pub struct WelcashToken;

#[contractimpl]
impl WelcashToken {
    /// Initialize the token with `owner` as the first owner
    ///
    /// Writes token metadata and leaves supply at zero and transfers
    /// unpaused.
    ///
    /// # Errors
    /// - `AlreadyInitialized` - called more than once
    pub fn initialize(env: Env, owner: Address) -> Result<(), TokenError> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }

        storage::write_owner(&env, &owner);
        storage::write_paused(&env, false);
        storage::write_total_supply(&env, 0);
        metadata::write_metadata(&env);
        Ok(())
    }

    /// Mint new tokens (owner only)
    ///
    /// # Arguments
    /// * `caller` - Must be the current owner
    /// * `to` - Recipient of the new tokens
    /// * `amount` - Amount in base units
    ///
    /// # Errors
    /// - `NotOwner` - `caller` is not the owner
    /// - `InvalidAmount` - negative amount or burn-address recipient
    /// - `SupplyCapExceeded` - total supply would exceed the cap
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        balance::mint(&env, caller, to, amount)
    }

    /// Transfer tokens from `from` to `to`
    ///
    /// Sending to the burn address destroys the tokens instead of crediting
    /// the recipient.
    ///
    /// # Errors
    /// - `Paused` - transfers are paused
    /// - `UserBlocked` - `from` is blocked
    /// - `InsufficientBalance` - `from` holds less than `amount`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        balance::transfer(&env, from, to, amount)
    }

    /// Transfer tokens from `from` to `to` using `spender`'s allowance
    ///
    /// # Errors
    /// - `Paused` - transfers are paused
    /// - `UserBlocked` - `spender` or `from` is blocked
    /// - `AllowanceExceeded` - allowance is lower than `amount`
    /// - `InsufficientBalance` - `from` holds less than `amount`
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        balance::transfer_from(&env, spender, from, to, amount)
    }

    /// Set `spender`'s allowance over `from`'s tokens to `amount`
    ///
    /// # Errors
    /// - `UserBlocked` - `from` is blocked
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        balance::approve(&env, from, spender, amount)
    }

    /// Block `user` from transfers and approvals (owner only)
    pub fn block_user(env: Env, caller: Address, user: Address) -> Result<(), TokenError> {
        access::block_user(&env, caller, user)
    }

    /// Lift a block on `user` (owner only)
    pub fn unblock_user(env: Env, caller: Address, user: Address) -> Result<(), TokenError> {
        access::unblock_user(&env, caller, user)
    }

    /// Pause all transfers (owner only)
    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        access::set_paused(&env, caller, true)
    }

    /// Resume transfers (owner only)
    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        access::set_paused(&env, caller, false)
    }

    /// Hand ownership to `new_owner` (owner only)
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        access::transfer_ownership(&env, caller, new_owner)
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        storage::read_owner(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        balance::balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        balance::allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        balance::total_supply(&env)
    }

    /// Cumulative amount destroyed through the burn address.
    pub fn total_burned(env: Env) -> i128 {
        balance::total_burned(&env)
    }

    pub fn supply_cap(_env: Env) -> i128 {
        SUPPLY_CAP
    }

    pub fn burn_address(env: Env) -> Address {
        metadata::burn_address(&env)
    }

    pub fn is_blocked(env: Env, user: Address) -> bool {
        access::is_blocked(&env, &user)
    }

    pub fn is_paused(env: Env) -> bool {
        access::is_paused(&env)
    }

    pub fn name(env: Env) -> String {
        metadata::read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        metadata::read_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        metadata::read_metadata(&env).decimal
    }
}
