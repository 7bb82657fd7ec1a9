use soroban_sdk::{Address, Env};

use crate::error::TokenError;
use crate::state;
use crate::storage_types::{AllowanceKey, Balance, DataKey};

fn allowance_key(owner: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    })
}

/// Amount `spender` may still move out of `owner`'s balance; zero if never approved.
pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> Result<Balance, TokenError> {
    let key = allowance_key(owner, spender);
    Ok(state::read_persistent(env, &key)?.unwrap_or_else(Balance::zero))
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = allowance_key(owner, spender);
    state::write_persistent(env, &key, &Balance { amount });
}

/// Allowance after approving another `amount` on top of the current one.
pub fn increase(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, TokenError> {
    get_allowance(env, owner, spender)?
        .amount
        .checked_add(amount)
        .ok_or(TokenError::Overflow)
}

/// Allowance left once `amount` of it is used.
pub fn spend(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, TokenError> {
    let current = get_allowance(env, owner, spender)?.amount;
    if current < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(current - amount)
}
