use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::ControllerError;

/// One of the two fixed signer positions.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SignerSlot {
    First = 0,
    Second = 1,
}

/// The immutable signer set.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerPair {
    pub first: Address,
    pub second: Address,
}

impl SignerPair {
    /// Build the pair from an init argument. Anything other than two
    /// distinct addresses is rejected.
    pub fn from_signers(signers: &Vec<Address>) -> Result<Self, ControllerError> {
        if signers.len() != 2 {
            return Err(ControllerError::InvalidSignerCount);
        }
        let first = signers.get(0).ok_or(ControllerError::InvalidSignerCount)?;
        let second = signers.get(1).ok_or(ControllerError::InvalidSignerCount)?;
        if first == second {
            return Err(ControllerError::InvalidSignerCount);
        }
        Ok(Self { first, second })
    }

    pub fn slot_of(&self, addr: &Address) -> Option<SignerSlot> {
        if *addr == self.first {
            Some(SignerSlot::First)
        } else if *addr == self.second {
            Some(SignerSlot::Second)
        } else {
            None
        }
    }

    pub fn to_vec(&self, env: &Env) -> Vec<Address> {
        let mut out = Vec::new(env);
        out.push_back(self.first.clone());
        out.push_back(self.second.clone());
        out
    }
}

/// A pending mint: who receives and how much.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintProposal {
    pub recipient: Address,
    pub amount: i128,
}

/// Storage keys for controller state.
///
/// An absent proposal entry is the empty slot.
#[contracttype]
#[derive(Clone)]
pub enum ControllerDataKey {
    /// Governed token contract (instance)
    Token,
    /// Signer pair (instance)
    Signers,
    /// Pending mint for a signer slot
    MintProposal(SignerSlot),
    /// Pending ownership change for a signer slot
    OwnershipProposal(SignerSlot),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&ControllerDataKey::Signers)
}

pub fn read_signers(env: &Env) -> Result<SignerPair, ControllerError> {
    env.storage()
        .instance()
        .get(&ControllerDataKey::Signers)
        .ok_or(ControllerError::NotInitialized)
}

pub fn write_signers(env: &Env, signers: &SignerPair) {
    env.storage()
        .instance()
        .set(&ControllerDataKey::Signers, signers);
}

pub fn read_token(env: &Env) -> Result<Address, ControllerError> {
    env.storage()
        .instance()
        .get(&ControllerDataKey::Token)
        .ok_or(ControllerError::NotInitialized)
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&ControllerDataKey::Token, token);
}

pub fn read_mint_proposal(env: &Env, slot: SignerSlot) -> Option<MintProposal> {
    env.storage()
        .persistent()
        .get(&ControllerDataKey::MintProposal(slot))
}

pub fn write_mint_proposal(env: &Env, slot: SignerSlot, proposal: &MintProposal) {
    env.storage()
        .persistent()
        .set(&ControllerDataKey::MintProposal(slot), proposal);
}

pub fn clear_mint_proposal(env: &Env, slot: SignerSlot) {
    env.storage()
        .persistent()
        .remove(&ControllerDataKey::MintProposal(slot));
}

pub fn read_ownership_proposal(env: &Env, slot: SignerSlot) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&ControllerDataKey::OwnershipProposal(slot))
}

pub fn write_ownership_proposal(env: &Env, slot: SignerSlot, new_owner: &Address) {
    env.storage()
        .persistent()
        .set(&ControllerDataKey::OwnershipProposal(slot), new_owner);
}

pub fn clear_ownership_proposal(env: &Env, slot: SignerSlot) {
    env.storage()
        .persistent()
        .remove(&ControllerDataKey::OwnershipProposal(slot));
}
