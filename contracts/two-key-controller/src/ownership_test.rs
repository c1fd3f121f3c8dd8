use super::*;
use crate::test_helpers::deploy;
use soroban_sdk::{testutils::Address as _, Address};
use welcash_token::TokenError;

#[test]
fn propose_stores_pending_owner() {
    let d = deploy();
    let new_owner = Address::generate(&d.env);

    d.controller.propose_ownership_change(&d.s0, &new_owner);
    assert_eq!(
        d.controller.ownership_change_proposal(&d.s0),
        Some(new_owner)
    );
    assert_eq!(d.controller.ownership_change_proposal(&d.s1), None);
}

#[test]
fn owner_unchanged_before_confirmation() {
    let d = deploy();
    let new_owner = Address::generate(&d.env);

    d.controller.propose_ownership_change(&d.s0, &new_owner);
    assert_eq!(d.token.owner(), d.controller.address);
}

#[test]
fn confirmation_transfers_ownership() {
    let d = deploy();
    let new_owner = Address::generate(&d.env);

    d.controller.propose_ownership_change(&d.s0, &new_owner);
    assert!(d
        .controller
        .confirm_ownership_change(&d.s1, &d.s0, &new_owner));

    assert_eq!(d.token.owner(), new_owner);
    assert_eq!(d.controller.ownership_change_proposal(&d.s0), None);

    // the new owner administers the token directly
    d.token.mint(&new_owner, &new_owner, &5);
    assert_eq!(d.token.balance(&new_owner), 5);
}

#[test]
fn confirmation_without_proposal_is_noop() {
    let d = deploy();
    let new_owner = Address::generate(&d.env);

    assert!(!d
        .controller
        .confirm_ownership_change(&d.s1, &d.s0, &new_owner));
    assert_eq!(d.token.owner(), d.controller.address);
}

#[test]
fn mismatched_owner_is_noop() {
    let d = deploy();
    let proposed = Address::generate(&d.env);
    let other = Address::generate(&d.env);

    d.controller.propose_ownership_change(&d.s0, &proposed);
    assert!(!d
        .controller
        .confirm_ownership_change(&d.s1, &d.s0, &other));
    assert_eq!(d.token.owner(), d.controller.address);
    assert_eq!(
        d.controller.ownership_change_proposal(&d.s0),
        Some(proposed)
    );
}

#[test]
fn self_confirmation_rejected() {
    let d = deploy();
    let new_owner = Address::generate(&d.env);

    d.controller.propose_ownership_change(&d.s0, &new_owner);
    assert_eq!(
        d.controller
            .try_confirm_ownership_change(&d.s0, &d.s0, &new_owner),
        Err(Ok(ControllerError::SelfConfirmationNotAllowed))
    );
    assert_eq!(d.token.owner(), d.controller.address);
}

#[test]
fn non_signer_cannot_propose_or_confirm() {
    let d = deploy();
    let rando = Address::generate(&d.env);

    assert_eq!(
        d.controller.try_propose_ownership_change(&rando, &rando),
        Err(Ok(ControllerError::NotASigner))
    );

    d.controller.propose_ownership_change(&d.s0, &rando);
    assert_eq!(
        d.controller
            .try_confirm_ownership_change(&rando, &d.s0, &rando),
        Err(Ok(ControllerError::NotASigner))
    );
    assert_eq!(d.token.owner(), d.controller.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #6)")]
fn revoke_without_proposal_panics() {
    let d = deploy();
    d.controller.revoke_ownership_change_proposal(&d.s0);
}

#[test]
fn revoke_clears_pending_change() {
    let d = deploy();
    let new_owner = Address::generate(&d.env);

    d.controller.propose_ownership_change(&d.s0, &new_owner);
    d.controller.revoke_ownership_change_proposal(&d.s0);
    assert_eq!(d.controller.ownership_change_proposal(&d.s0), None);

    assert!(!d
        .controller
        .confirm_ownership_change(&d.s1, &d.s0, &new_owner));
    assert_eq!(d.token.owner(), d.controller.address);
}

#[test]
fn mint_and_ownership_slots_are_separate() {
    let d = deploy();
    let target = Address::generate(&d.env);

    d.controller.propose_mint(&d.s0, &target, &10);
    d.controller.propose_ownership_change(&d.s0, &target);

    d.controller.revoke_ownership_change_proposal(&d.s0);
    assert!(d.controller.mint_proposal(&d.s0).is_some());
    assert_eq!(
        d.controller.try_revoke_ownership_change_proposal(&d.s0),
        Err(Ok(ControllerError::NoProposalToRevoke))
    );
}

#[test]
fn controller_loses_mint_power_after_handing_off_ownership() {
    let d = deploy();
    let new_owner = Address::generate(&d.env);
    let target = Address::generate(&d.env);

    d.controller.propose_ownership_change(&d.s0, &new_owner);
    d.controller
        .confirm_ownership_change(&d.s1, &d.s0, &new_owner);

    d.controller.propose_mint(&d.s0, &target, &10);
    assert_eq!(
        d.controller
            .try_confirm_mint_proposal(&d.s1, &d.s0, &target, &10),
        Err(Ok(ControllerError::TokenRejected))
    );
    assert_eq!(d.token.balance(&target), 0);
    assert!(d.controller.mint_proposal(&d.s0).is_some());
}

#[test]
fn second_handoff_rejected_by_token_keeps_proposal() {
    let d = deploy();
    let new_owner = Address::generate(&d.env);
    let other = Address::generate(&d.env);

    d.controller.propose_ownership_change(&d.s0, &new_owner);
    d.controller
        .confirm_ownership_change(&d.s1, &d.s0, &new_owner);

    d.controller.propose_ownership_change(&d.s1, &other);
    assert_eq!(
        d.controller
            .try_confirm_ownership_change(&d.s0, &d.s1, &other),
        Err(Ok(ControllerError::TokenRejected))
    );
    assert_eq!(d.token.owner(), new_owner);
    assert_eq!(
        d.controller.ownership_change_proposal(&d.s1),
        Some(other)
    );
}

#[test]
fn routine_administration_stays_with_token_owner() {
    let d = deploy();
    let user = Address::generate(&d.env);

    // once the controller owns the token, the deployer can no longer
    // block or pause, and the controller exposes no pass-through
    assert_eq!(
        d.token.try_block_user(&d.deployer, &user),
        Err(Ok(TokenError::NotOwner))
    );
    assert_eq!(
        d.token.try_pause(&d.deployer),
        Err(Ok(TokenError::NotOwner))
    );
}
