//! Caller identity and admin-claim resolution.
//!
//! Every entry point resolves a [`CallerContext`] exactly once and passes it
//! down; nothing below this module talks to the identity service.

use soroban_sdk::{contractclient, Address, Env, Symbol};

use crate::error::TokenError;
use crate::registry;
use crate::storage_types::ADMIN_ATTRIBUTE;

/// Interface the configured identity contract must expose.
#[contractclient(name = "IdentityClient")]
pub trait IdentityService {
    fn has_attribute(env: Env, id: Address, attribute: Symbol) -> bool;
}

/// Verified caller of the current invocation.
#[derive(Clone, Debug)]
pub struct CallerContext {
    pub id: Address,
    pub is_admin: bool,
}

impl CallerContext {
    pub fn require_admin(&self) -> Result<&Address, TokenError> {
        if !self.is_admin {
            return Err(TokenError::Unauthorized);
        }
        Ok(&self.id)
    }

    pub fn require_account(&self, account: &Address) -> Result<(), TokenError> {
        if self.id != *account {
            return Err(TokenError::Unauthorized);
        }
        Ok(())
    }
}

/// Verify the caller's signature without consulting the identity service.
pub fn authenticate(caller: Address) -> CallerContext {
    caller.require_auth();
    CallerContext {
        id: caller,
        is_admin: false,
    }
}

/// Verify the caller's signature and look up its admin claim.
///
/// A failed lookup (unconfigured ledger, trapped or erroring identity
/// contract, unusable credential) is reported as `Unauthorized`. A missing
/// claim is not an error here; `require_admin` rejects it.
pub fn authenticate_admin(env: &Env, caller: Address) -> Result<CallerContext, TokenError> {
    caller.require_auth();

    let config = registry::get_config(env).map_err(|_| TokenError::Unauthorized)?;
    let identity = IdentityClient::new(env, &config.identity);
    let is_admin = match identity.try_has_attribute(&caller, &ADMIN_ATTRIBUTE) {
        Ok(Ok(claimed)) => claimed,
        _ => return Err(TokenError::Unauthorized),
    };

    Ok(CallerContext {
        id: caller,
        is_admin,
    })
}
