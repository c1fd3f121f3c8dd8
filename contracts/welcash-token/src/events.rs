//! # Token Events
//!
//! Every state change on the token publishes one of the structs below.
//! `#[contractevent]` derives the snake_case struct name as the leading
//! topic (`mint_event`, `transfer_event`, ...) and packs the fields into the
//! data map, so indexers can follow supply and administration changes
//! without reading storage.
use soroban_sdk::{contractevent, Address, Env};

/// Emitted when new supply is minted.
#[contractevent]
#[derive(Clone, Debug)]
pub struct MintEvent {
    pub owner: Address,
    pub to: Address,
    pub amount: i128,
    pub total_supply: i128,
}

/// Emitted on an ordinary transfer (direct or via allowance).
#[contractevent]
#[derive(Clone, Debug)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

/// Emitted when tokens are sent to the burn address.
#[contractevent]
#[derive(Clone, Debug)]
pub struct BurnEvent {
    pub from: Address,
    pub amount: i128,
    pub total_supply: i128,
}

/// Emitted when an allowance is set.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ApproveEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct UserBlockedEvent {
    pub owner: Address,
    pub user: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct UserUnblockedEvent {
    pub owner: Address,
    pub user: Address,
}

/// Emitted on pause and unpause.
#[contractevent]
#[derive(Clone, Debug)]
pub struct PauseEvent {
    pub paused: bool,
    pub owner: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_mint(e: &Env, event: MintEvent) {
    event.publish(e);
}

pub fn emit_transfer(e: &Env, event: TransferEvent) {
    event.publish(e);
}

pub fn emit_burn(e: &Env, event: BurnEvent) {
    event.publish(e);
}

pub fn emit_approve(e: &Env, event: ApproveEvent) {
    event.publish(e);
}

pub fn emit_user_blocked(e: &Env, event: UserBlockedEvent) {
    event.publish(e);
}

pub fn emit_user_unblocked(e: &Env, event: UserUnblockedEvent) {
    event.publish(e);
}

pub fn emit_pause(e: &Env, event: PauseEvent) {
    event.publish(e);
}

pub fn emit_ownership_transferred(e: &Env, event: OwnershipTransferredEvent) {
    event.publish(e);
}
