#![no_std]

//! Fungible-token ledger contract.
//!
//! Keeps a single token descriptor, per-account balances and per
//! (owner, spender) allowances in host storage. `initialize`, `mint` and
//! `burn` are reserved for callers whose identity carries the `admin`
//! attribute in the configured identity contract.
//!
//! Whether allowances are tracked against balances is chosen once at
//! deployment through [`Semantics`].

mod allowance;
pub mod auth;
mod balance;
mod contract;
mod error;
mod events;
mod registry;
mod state;
mod storage_types;

pub use crate::auth::{CallerContext, IdentityClient, IdentityService};
pub use crate::contract::{TokenLedger, TokenLedgerClient, TokenLedgerTrait};
pub use crate::error::TokenError;
pub use crate::storage_types::{
    AllowanceKey, Balance, DataKey, LedgerConfig, Semantics, TokenDescriptor, ADMIN_ATTRIBUTE,
    INITIAL_DECIMALS, INITIAL_NAME, INITIAL_SUPPLY, INITIAL_SYMBOL, MAX_SUPPLY,
};

#[cfg(test)]
mod tests;
