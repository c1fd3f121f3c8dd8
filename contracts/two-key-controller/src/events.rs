//! Controller events. Topics follow the snake_case struct name
//! (`mint_proposed_event`, `mint_confirmed_event`, ...).
use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug)]
pub struct MintProposedEvent {
    pub proposer: Address,
    pub recipient: Address,
    pub amount: i128,
}

/// Emitted after the token accepted the mint.
#[contractevent]
#[derive(Clone, Debug)]
pub struct MintConfirmedEvent {
    pub proposer: Address,
    pub confirmer: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct MintRevokedEvent {
    pub proposer: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipChangeProposedEvent {
    pub proposer: Address,
    pub new_owner: Address,
}

/// Emitted after the token accepted the ownership transfer.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipChangeConfirmedEvent {
    pub proposer: Address,
    pub confirmer: Address,
    pub new_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipChangeRevokedEvent {
    pub proposer: Address,
}

pub fn emit_mint_proposed(e: &Env, event: MintProposedEvent) {
    event.publish(e);
}

pub fn emit_mint_confirmed(e: &Env, event: MintConfirmedEvent) {
    event.publish(e);
}

pub fn emit_mint_revoked(e: &Env, event: MintRevokedEvent) {
    event.publish(e);
}

pub fn emit_ownership_change_proposed(e: &Env, event: OwnershipChangeProposedEvent) {
    event.publish(e);
}

pub fn emit_ownership_change_confirmed(e: &Env, event: OwnershipChangeConfirmedEvent) {
    event.publish(e);
}

pub fn emit_ownership_change_revoked(e: &Env, event: OwnershipChangeRevokedEvent) {
    event.publish(e);
}
