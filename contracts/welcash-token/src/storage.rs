use soroban_sdk::{contracttype, Address, Env};

use crate::error::TokenError;

/// Storage keys for token state.
///
/// Scalar configuration sits in instance storage; everything keyed by an
/// address goes to persistent storage.
#[contracttype]
#[derive(Clone)]
pub enum TokenDataKey {
    /// Current owner (instance)
    Owner,
    /// Global transfer pause flag (instance)
    Paused,
    /// Circulating supply (instance)
    TotalSupply,
    /// Cumulative amount sent to the burn address (instance)
    TotalBurned,
    /// Per-holder balance
    Balance(Address),
    /// Allowance granted by `from` to `spender`
    Allowance(AllowanceKey),
    /// Block-list membership flag
    Blocked(Address),
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&TokenDataKey::Owner)
}

pub fn read_owner(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&TokenDataKey::Owner)
        .ok_or(TokenError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&TokenDataKey::Owner, owner);
}

pub fn read_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&TokenDataKey::Paused)
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&TokenDataKey::Paused, &paused);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&TokenDataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage()
        .instance()
        .set(&TokenDataKey::TotalSupply, &supply);
}

pub fn read_total_burned(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&TokenDataKey::TotalBurned)
        .unwrap_or(0)
}

pub fn write_total_burned(env: &Env, burned: i128) {
    env.storage()
        .instance()
        .set(&TokenDataKey::TotalBurned, &burned);
}

pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&TokenDataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, holder: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&TokenDataKey::Balance(holder.clone()), &amount);
}

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = TokenDataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = TokenDataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

pub fn read_blocked(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&TokenDataKey::Blocked(user.clone()))
        .unwrap_or(false)
}

pub fn write_blocked(env: &Env, user: &Address, blocked: bool) {
    let key = TokenDataKey::Blocked(user.clone());
    if blocked {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}
