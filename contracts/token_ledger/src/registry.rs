use soroban_sdk::Env;

use crate::error::TokenError;
use crate::state;
use crate::storage_types::{DataKey, LedgerConfig, TokenDescriptor};

pub fn try_descriptor(env: &Env) -> Result<Option<TokenDescriptor>, TokenError> {
    state::read_instance(env, &DataKey::Token)
}

pub fn get_descriptor(env: &Env) -> Result<TokenDescriptor, TokenError> {
    try_descriptor(env)?.ok_or(TokenError::NotFound)
}

pub fn set_descriptor(env: &Env, descriptor: &TokenDescriptor) {
    state::write_instance(env, &DataKey::Token, descriptor);
}

pub fn try_config(env: &Env) -> Result<Option<LedgerConfig>, TokenError> {
    state::read_instance(env, &DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<LedgerConfig, TokenError> {
    try_config(env)?.ok_or(TokenError::NotConfigured)
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    state::write_instance(env, &DataKey::Config, config);
}
