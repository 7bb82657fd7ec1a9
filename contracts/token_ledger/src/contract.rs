use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::allowance;
use crate::auth::{self, CallerContext};
use crate::balance;
use crate::error::TokenError;
use crate::events;
use crate::registry;
use crate::state;
use crate::storage_types::{
    Balance, LedgerConfig, Semantics, TokenDescriptor, INITIAL_DECIMALS, INITIAL_NAME,
    INITIAL_SUPPLY, INITIAL_SYMBOL, MAX_SUPPLY,
};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

pub trait TokenLedgerTrait {
    /// Bind the identity contract and allowance semantics. Callable once,
    /// by anyone: deploy and configure in the same transaction.
    fn configure(env: Env, identity: Address, semantics: Semantics) -> Result<(), TokenError>;

    /// Create the token descriptor and credit the whole starting supply to
    /// the calling admin.
    fn initialize(env: Env, caller: Address) -> Result<TokenDescriptor, TokenError>;

    /// Create `amount` new tokens and credit them to the calling admin.
    fn mint(env: Env, caller: Address, amount: i128) -> Result<(), TokenError>;

    /// Move `amount` from `from` to `to`.
    fn transfer(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError>;

    /// Add `amount` to what the caller may spend out of `owner`'s balance.
    fn approve(env: Env, caller: Address, owner: Address, amount: i128) -> Result<(), TokenError>;

    /// Spend `amount` of the caller's allowance on `owner`, crediting `to`.
    fn transfer_from(
        env: Env,
        caller: Address,
        owner: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError>;

    /// Destroy `amount` tokens held by the calling admin.
    fn burn(env: Env, caller: Address, amount: i128) -> Result<(), TokenError>;

    fn balance(env: Env, account: Address) -> Result<Balance, TokenError>;

    fn allowance(env: Env, owner: Address, spender: Address) -> Result<Balance, TokenError>;

    fn descriptor(env: Env) -> Result<TokenDescriptor, TokenError>;

    fn total_supply(env: Env) -> Result<i128, TokenError>;

    fn config(env: Env) -> Result<LedgerConfig, TokenError>;
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct TokenLedger;

#[contractimpl]
impl TokenLedgerTrait for TokenLedger {
    fn configure(env: Env, identity: Address, semantics: Semantics) -> Result<(), TokenError> {
        if registry::try_config(&env)?.is_some() {
            return Err(TokenError::AlreadyConfigured);
        }
        registry::set_config(&env, &LedgerConfig { identity, semantics });
        state::bump_instance(&env);
        Ok(())
    }

    fn initialize(env: Env, caller: Address) -> Result<TokenDescriptor, TokenError> {
        let ctx = auth::authenticate_admin(&env, caller)?;
        let admin = ctx.require_admin()?;

        if registry::try_descriptor(&env)?.is_some() {
            return Err(TokenError::AlreadyInitialized);
        }

        let descriptor = TokenDescriptor {
            name: String::from_str(&env, INITIAL_NAME),
            symbol: String::from_str(&env, INITIAL_SYMBOL),
            decimals: INITIAL_DECIMALS,
            total_supply: INITIAL_SUPPLY,
        };
        let credited = balance::credit(&env, admin, descriptor.total_supply)?;

        registry::set_descriptor(&env, &descriptor);
        balance::set_balance(&env, admin, credited);
        state::bump_instance(&env);

        events::initialized(&env, admin, descriptor.total_supply);
        Ok(descriptor)
    }

    fn mint(env: Env, caller: Address, amount: i128) -> Result<(), TokenError> {
        ensure_non_negative(amount)?;
        let ctx = auth::authenticate_admin(&env, caller)?;
        let admin = ctx.require_admin()?;

        let mut descriptor = registry::get_descriptor(&env)?;
        let total_supply = descriptor
            .total_supply
            .checked_add(amount)
            .filter(|supply| *supply <= MAX_SUPPLY)
            .ok_or(TokenError::CapacityExceeded)?;
        let credited = balance::credit(&env, admin, amount)?;

        descriptor.total_supply = total_supply;
        registry::set_descriptor(&env, &descriptor);
        balance::set_balance(&env, admin, credited);
        state::bump_instance(&env);

        events::minted(&env, admin, amount, total_supply);
        Ok(())
    }

    fn transfer(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        ensure_non_negative(amount)?;
        let ctx = auth::authenticate(caller);
        let config = registry::get_config(&env)?;

        if config.semantics == Semantics::Conserving {
            ctx.require_account(&from)?;
        }

        move_balance(&env, &from, &to, amount)?;
        state::bump_instance(&env);

        events::transferred(&env, &from, &to, amount);
        Ok(())
    }

    fn approve(env: Env, caller: Address, owner: Address, amount: i128) -> Result<(), TokenError> {
        ensure_non_negative(amount)?;
        let ctx = auth::authenticate(caller);
        let config = registry::get_config(&env)?;

        match config.semantics {
            Semantics::Conserving => require_owner_consent(&ctx, &owner),
            Semantics::Literal => {
                if balance::get_balance(&env, &owner)?.amount < amount {
                    return Err(TokenError::InsufficientBalance);
                }
            }
        }

        let spender = &ctx.id;
        let approved = allowance::increase(&env, &owner, spender, amount)?;

        allowance::set_allowance(&env, &owner, spender, approved);
        state::bump_instance(&env);

        events::approved(&env, &owner, spender, approved);
        Ok(())
    }

    fn transfer_from(
        env: Env,
        caller: Address,
        owner: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        ensure_non_negative(amount)?;
        let ctx = auth::authenticate(caller);
        let config = registry::get_config(&env)?;
        let spender = &ctx.id;

        let remaining = allowance::spend(&env, &owner, spender, amount)?;

        match config.semantics {
            Semantics::Conserving => {
                // Validates the owner's balance before anything is written.
                let (owner_after, to_after) = plan_move(&env, &owner, &to, amount)?;
                allowance::set_allowance(&env, &owner, spender, remaining);
                apply_move(&env, &owner, &to, owner_after, to_after);
            }
            Semantics::Literal => {
                let received = balance::credit(&env, &to, amount)?;
                allowance::set_allowance(&env, &owner, spender, remaining);
                balance::set_balance(&env, &to, received);
            }
        }
        state::bump_instance(&env);

        events::transferred_from(&env, spender, &owner, &to, amount);
        Ok(())
    }

    fn burn(env: Env, caller: Address, amount: i128) -> Result<(), TokenError> {
        ensure_non_negative(amount)?;
        let ctx = auth::authenticate_admin(&env, caller)?;
        let admin = ctx.require_admin()?;

        let mut descriptor = registry::get_descriptor(&env)?;
        if descriptor.total_supply < amount {
            return Err(TokenError::InsufficientSupply);
        }
        let remaining = balance::debit(&env, admin, amount)?;

        descriptor.total_supply -= amount;
        registry::set_descriptor(&env, &descriptor);
        balance::set_balance(&env, admin, remaining);
        state::bump_instance(&env);

        events::burned(&env, admin, amount, descriptor.total_supply);
        Ok(())
    }

    fn balance(env: Env, account: Address) -> Result<Balance, TokenError> {
        balance::get_balance(&env, &account)
    }

    fn allowance(env: Env, owner: Address, spender: Address) -> Result<Balance, TokenError> {
        allowance::get_allowance(&env, &owner, &spender)
    }

    fn descriptor(env: Env) -> Result<TokenDescriptor, TokenError> {
        registry::get_descriptor(&env)
    }

    fn total_supply(env: Env) -> Result<i128, TokenError> {
        Ok(registry::get_descriptor(&env)?.total_supply)
    }

    fn config(env: Env) -> Result<LedgerConfig, TokenError> {
        registry::get_config(&env)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn ensure_non_negative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// The owner co-signs an approval granted to someone else. A single
/// address may only be authorised once per invocation.
fn require_owner_consent(ctx: &CallerContext, owner: &Address) {
    if ctx.id != *owner {
        owner.require_auth();
    }
}

/// Post-move balances of `from` and `to`, checked but not yet written.
fn plan_move(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(i128, i128), TokenError> {
    let from_after = balance::debit(env, from, amount)?;
    if from == to {
        let unchanged = from_after + amount;
        return Ok((unchanged, unchanged));
    }
    Ok((from_after, balance::credit(env, to, amount)?))
}

fn apply_move(env: &Env, from: &Address, to: &Address, from_after: i128, to_after: i128) {
    balance::set_balance(env, from, from_after);
    if from != to {
        balance::set_balance(env, to, to_after);
    }
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let (from_after, to_after) = plan_move(env, from, to, amount)?;
    apply_move(env, from, to, from_after, to_after);
    Ok(())
}
