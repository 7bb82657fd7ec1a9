//! `Semantics::Literal`: allowances are not tied to the owner's balance
//! and `transfer` never checks who is moving the funds.

use super::setup_initialized;
use crate::{Semantics, TokenError, INITIAL_SUPPLY};

#[test]
fn test_transfer_by_any_caller_moves_owner_funds() {
    let ledger = setup_initialized(Semantics::Literal);
    let stranger = ledger.account();

    ledger
        .client
        .transfer(&stranger, &ledger.admin, &stranger, &700);

    assert_eq!(ledger.balance_of(&ledger.admin), INITIAL_SUPPLY - 700);
    assert_eq!(ledger.balance_of(&stranger), 700);
    assert_eq!(ledger.client.total_supply(), INITIAL_SUPPLY);
}

#[test]
fn test_transfer_more_than_balance_still_fails() {
    let ledger = setup_initialized(Semantics::Literal);
    let stranger = ledger.account();

    let result = ledger
        .client
        .try_transfer(&stranger, &ledger.admin, &stranger, &(INITIAL_SUPPLY + 1));
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(ledger.balance_of(&ledger.admin), INITIAL_SUPPLY);
}

#[test]
fn test_approve_is_granted_by_spender_alone() {
    let ledger = setup_initialized(Semantics::Literal);
    let spender = ledger.account();

    ledger.client.approve(&spender, &ledger.admin, &300);

    let signers = ledger.env.auths();
    assert_eq!(signers.len(), 1);
    assert_eq!(signers[0].0, spender);
    assert_eq!(ledger.client.allowance(&ledger.admin, &spender).amount, 300);
}

#[test]
fn test_approve_requires_current_owner_balance() {
    let ledger = setup_initialized(Semantics::Literal);
    let owner = ledger.account();
    let spender = ledger.account();
    ledger.client.transfer(&ledger.admin, &ledger.admin, &owner, &50);

    let result = ledger.client.try_approve(&spender, &owner, &51);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(ledger.client.allowance(&owner, &spender).amount, 0);

    // Each approval is checked on its own, so repeated approvals can exceed the balance.
    ledger.client.approve(&spender, &owner, &50);
    ledger.client.approve(&spender, &owner, &50);
    assert_eq!(ledger.client.allowance(&owner, &spender).amount, 100);
}

#[test]
fn test_transfer_from_consumes_allowance_without_debiting_owner() {
    let ledger = setup_initialized(Semantics::Literal);
    let spender = ledger.account();
    let recipient = ledger.account();

    ledger.client.approve(&spender, &ledger.admin, &400);
    ledger
        .client
        .transfer_from(&spender, &ledger.admin, &recipient, &400);

    assert_eq!(ledger.client.allowance(&ledger.admin, &spender).amount, 0);
    assert_eq!(ledger.balance_of(&ledger.admin), INITIAL_SUPPLY);
    assert_eq!(ledger.balance_of(&recipient), 400);

    // The credited amount was never debited: balances now exceed supply.
    let holders = [ledger.admin.clone(), recipient, spender];
    assert_eq!(
        ledger.sum_of(&holders),
        ledger.client.total_supply() + 400
    );
}

#[test]
fn test_transfer_from_over_allowance_fails() {
    let ledger = setup_initialized(Semantics::Literal);
    let spender = ledger.account();
    let recipient = ledger.account();

    ledger.client.approve(&spender, &ledger.admin, &10);

    let result = ledger
        .client
        .try_transfer_from(&spender, &ledger.admin, &recipient, &11);
    assert_eq!(result, Err(Ok(TokenError::InsufficientAllowance)));
    assert_eq!(ledger.client.allowance(&ledger.admin, &spender).amount, 10);
    assert_eq!(ledger.balance_of(&recipient), 0);
}

#[test]
fn test_admin_operations_are_unchanged() {
    let ledger = setup_initialized(Semantics::Literal);
    let outsider = ledger.account();

    ledger.client.mint(&ledger.admin, &500);
    ledger.client.burn(&ledger.admin, &200);

    assert_eq!(ledger.client.total_supply(), INITIAL_SUPPLY + 300);
    assert_eq!(ledger.balance_of(&ledger.admin), INITIAL_SUPPLY + 300);
    assert_eq!(
        ledger.client.try_mint(&outsider, &1),
        Err(Ok(TokenError::Unauthorized))
    );
}
