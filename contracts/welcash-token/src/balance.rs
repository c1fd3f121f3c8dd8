//! # Balances, Allowances and Supply
//!
//! Minting, transfers and allowances for wELCASH.
//!
//! ## Supply
//! `total_supply` always equals the sum of recorded balances. A transfer to
//! the burn address debits the sender without crediting anyone, moving the
//! amount from `total_supply` to `total_burned`. [`SUPPLY_CAP`] bounds
//! everything ever minted, `total_supply + total_burned`, so burning never
//! frees room for new mints.
//!
//! ## Gating
//! Every transfer-family call first passes
//! [`ensure_transfer_allowed`](crate::access::ensure_transfer_allowed), so the
//! pause flag and the block list apply uniformly to direct and delegated
//! transfers.

use soroban_sdk::{log, Address, Env};

use crate::access::{ensure_transfer_allowed, require_owner};
use crate::error::TokenError;
use crate::events::{
    emit_approve, emit_burn, emit_mint, emit_transfer, ApproveEvent, BurnEvent, MintEvent,
    TransferEvent,
};
use crate::metadata::{burn_address, SUPPLY_CAP};
use crate::storage::{
    read_allowance, read_balance, read_blocked, read_total_burned, read_total_supply,
    write_allowance, write_balance, write_total_burned, write_total_supply,
};

fn check_nonnegative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// Mint `amount` new tokens to `to` (owner only)
///
/// # Errors
/// - `NotOwner` - `caller` is not the owner
/// - `InvalidAmount` - negative amount, or `to` is the burn address
/// - `SupplyCapExceeded` - cumulative minting would exceed [`SUPPLY_CAP`]
pub fn mint(env: &Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
    require_owner(env, &caller)?;
    check_nonnegative(amount)?;

    if to == burn_address(env) {
        return Err(TokenError::InvalidAmount);
    }

    let new_supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    let minted = new_supply
        .checked_add(read_total_burned(env))
        .ok_or(TokenError::Overflow)?;
    if minted > SUPPLY_CAP {
        return Err(TokenError::SupplyCapExceeded);
    }

    let new_balance = read_balance(env, &to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    write_balance(env, &to, new_balance);
    write_total_supply(env, new_supply);

    emit_mint(
        env,
        MintEvent {
            owner: caller,
            to,
            amount,
            total_supply: new_supply,
        },
    );
    Ok(())
}

/// Transfer `amount` from `from` to `to`. `from` must authorize.
pub fn transfer(env: &Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
    from.require_auth();
    ensure_transfer_allowed(env, &from, &from)?;
    check_nonnegative(amount)?;

    move_balance(env, &from, &to, amount)
}

/// Transfer `amount` from `from` to `to` on behalf of `spender`, consuming
/// allowance. `spender` must authorize.
///
/// # Errors
/// - `Paused` - transfers are paused
/// - `UserBlocked` - `spender` or `from` is blocked
/// - `AllowanceExceeded` - `amount` is above the remaining allowance
/// - `InsufficientBalance` - `from` holds less than `amount`
pub fn transfer_from(
    env: &Env,
    spender: Address,
    from: Address,
    to: Address,
    amount: i128,
) -> Result<(), TokenError> {
    spender.require_auth();
    ensure_transfer_allowed(env, &spender, &from)?;
    check_nonnegative(amount)?;

    let allowance = read_allowance(env, &from, &spender);
    if amount > allowance {
        return Err(TokenError::AllowanceExceeded);
    }

    move_balance(env, &from, &to, amount)?;
    write_allowance(env, &from, &spender, allowance - amount);
    Ok(())
}

/// Set the allowance of `spender` over `from`'s balance to `amount`.
/// Overwrites any previous allowance.
pub fn approve(env: &Env, from: Address, spender: Address, amount: i128) -> Result<(), TokenError> {
    from.require_auth();

    if read_blocked(env, &from) {
        return Err(TokenError::UserBlocked);
    }
    check_nonnegative(amount)?;

    write_allowance(env, &from, &spender, amount);

    emit_approve(
        env,
        ApproveEvent {
            from,
            spender,
            amount,
        },
    );
    Ok(())
}

pub fn balance(env: &Env, holder: &Address) -> i128 {
    read_balance(env, holder)
}

pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    read_allowance(env, from, spender)
}

pub fn total_supply(env: &Env) -> i128 {
    read_total_supply(env)
}

pub fn total_burned(env: &Env) -> i128 {
    read_total_burned(env)
}

/// Debit `from` and credit `to`, or burn when `to` is the burn address.
/// Nothing is written unless the debit is covered.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }

    if *to == burn_address(env) {
        let new_supply = read_total_supply(env) - amount;
        let new_burned = read_total_burned(env)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        write_balance(env, from, from_balance - amount);
        write_total_supply(env, new_supply);
        write_total_burned(env, new_burned);

        log!(env, "burn {} amount={}", from, amount);
        emit_burn(
            env,
            BurnEvent {
                from: from.clone(),
                amount,
                total_supply: new_supply,
            },
        );
        return Ok(());
    }

    if from != to {
        let to_balance = read_balance(env, to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        write_balance(env, from, from_balance - amount);
        write_balance(env, to, to_balance);
    }

    emit_transfer(
        env,
        TransferEvent {
            from: from.clone(),
            to: to.clone(),
            amount,
        },
    );
    Ok(())
}
