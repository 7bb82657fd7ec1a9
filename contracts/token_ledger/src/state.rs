//! Typed access to host storage.
//!
//! Reads hand back `Option<T>`: `None` is "no record", and a value that
//! exists but does not decode as `T` is reported as
//! [`TokenError::Serialization`] instead of trapping the host.

use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

use crate::error::TokenError;
use crate::storage_types::{
    DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
};

fn decode<T>(env: &Env, raw: Option<Val>) -> Result<Option<T>, TokenError>
where
    T: TryFromVal<Env, Val>,
{
    raw.map(|val| T::try_from_val(env, &val).map_err(|_| TokenError::Serialization))
        .transpose()
}

pub(crate) fn read_instance<T>(env: &Env, key: &DataKey) -> Result<Option<T>, TokenError>
where
    T: TryFromVal<Env, Val>,
{
    let raw: Option<Val> = env.storage().instance().get(key);
    decode(env, raw)
}

pub(crate) fn write_instance<T>(env: &Env, key: &DataKey, value: &T)
where
    T: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, value);
}

pub(crate) fn read_persistent<T>(env: &Env, key: &DataKey) -> Result<Option<T>, TokenError>
where
    T: TryFromVal<Env, Val>,
{
    let raw: Option<Val> = env.storage().persistent().get(key);
    if raw.is_some() {
        bump_persistent(env, key);
    }
    decode(env, raw)
}

pub(crate) fn write_persistent<T>(env: &Env, key: &DataKey, value: &T)
where
    T: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

/// Holders that only receive or hold are kept alive by reads.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Keep the contract instance (config and descriptor) alive.
pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
