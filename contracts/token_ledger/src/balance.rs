use soroban_sdk::{Address, Env};

use crate::error::TokenError;
use crate::state;
use crate::storage_types::{Balance, DataKey};

/// Stored balance of `account`, or zero when it has never been credited.
pub fn get_balance(env: &Env, account: &Address) -> Result<Balance, TokenError> {
    let key = DataKey::Balance(account.clone());
    Ok(state::read_persistent(env, &key)?.unwrap_or_else(Balance::zero))
}

/// Persist `amount` for `account`. Zero balances are kept, not removed.
pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Balance(account.clone());
    state::write_persistent(env, &key, &Balance { amount });
}

/// Balance of `account` after receiving `amount`. Nothing is written.
pub fn credit(env: &Env, account: &Address, amount: i128) -> Result<i128, TokenError> {
    get_balance(env, account)?
        .amount
        .checked_add(amount)
        .ok_or(TokenError::Overflow)
}

/// Balance of `account` after giving up `amount`. Nothing is written.
pub fn debit(env: &Env, account: &Address, amount: i128) -> Result<i128, TokenError> {
    let current = get_balance(env, account)?.amount;
    if current < amount {
        return Err(TokenError::InsufficientBalance);
    }
    Ok(current - amount)
}
