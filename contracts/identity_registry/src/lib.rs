#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, Symbol, Vec};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Typed errors returned by the identity registry.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum IdentityError {
    /// `initialize` was already called.
    AlreadyInitialized = 1,
    /// No authority has been set yet.
    NotInitialized = 2,
    /// The credential exists but has been suspended by the authority.
    CredentialSuspended = 3,
}

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// Attribute claims attached to one verified identity.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Credential {
    pub attributes: Vec<Symbol>,
    pub suspended: bool,
}

/// Storage key space for the identity registry.
///
/// - `Authority`            → `Address`    (Instance)
/// - `Credential(Address)`  → `Credential` (Persistent)
#[contracttype]
pub enum DataKey {
    Authority,
    Credential(Address),
}

const DAY_IN_LEDGERS: u32 = 17_280;
const CREDENTIAL_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const CREDENTIAL_LIFETIME_THRESHOLD: u32 = CREDENTIAL_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

pub trait IdentityRegistryTrait {
    /// Set the authority allowed to manage credentials. Callable once and
    /// unauthenticated, so deploy and initialize in the same transaction.
    fn initialize(env: Env, authority: Address) -> Result<(), IdentityError>;

    /// Attach `attribute` to `id`. Granting an attribute twice is a no-op.
    /// Requires authorisation from the registry authority.
    fn grant_attribute(env: Env, id: Address, attribute: Symbol) -> Result<(), IdentityError>;

    /// Detach `attribute` from `id`.
    /// Requires authorisation from the registry authority.
    fn revoke_attribute(env: Env, id: Address, attribute: Symbol) -> Result<(), IdentityError>;

    /// Mark the credential of `id` as unusable; every lookup fails until reinstated.
    fn suspend(env: Env, id: Address) -> Result<(), IdentityError>;

    /// Lift a suspension.
    fn reinstate(env: Env, id: Address) -> Result<(), IdentityError>;

    /// Whether `id` carries `attribute`. Unknown identities carry nothing.
    fn has_attribute(env: Env, id: Address, attribute: Symbol) -> Result<bool, IdentityError>;

    /// All attributes currently attached to `id`.
    fn attributes(env: Env, id: Address) -> Result<Vec<Symbol>, IdentityError>;
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct IdentityRegistry;

#[contractimpl]
impl IdentityRegistryTrait for IdentityRegistry {
    fn initialize(env: Env, authority: Address) -> Result<(), IdentityError> {
        if env.storage().instance().has(&DataKey::Authority) {
            return Err(IdentityError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Authority, &authority);
        Ok(())
    }

    fn grant_attribute(env: Env, id: Address, attribute: Symbol) -> Result<(), IdentityError> {
        require_authority(&env)?;

        let mut credential = load_credential(&env, &id);
        if !credential.attributes.contains(&attribute) {
            credential.attributes.push_back(attribute);
        }
        store_credential(&env, &id, &credential);
        Ok(())
    }

    fn revoke_attribute(env: Env, id: Address, attribute: Symbol) -> Result<(), IdentityError> {
        require_authority(&env)?;

        let mut credential = load_credential(&env, &id);
        if let Some(index) = credential.attributes.first_index_of(&attribute) {
            credential.attributes.remove(index);
        }
        store_credential(&env, &id, &credential);
        Ok(())
    }

    fn suspend(env: Env, id: Address) -> Result<(), IdentityError> {
        require_authority(&env)?;

        let mut credential = load_credential(&env, &id);
        credential.suspended = true;
        store_credential(&env, &id, &credential);
        Ok(())
    }

    fn reinstate(env: Env, id: Address) -> Result<(), IdentityError> {
        require_authority(&env)?;

        let mut credential = load_credential(&env, &id);
        credential.suspended = false;
        store_credential(&env, &id, &credential);
        Ok(())
    }

    fn has_attribute(env: Env, id: Address, attribute: Symbol) -> Result<bool, IdentityError> {
        let credential = load_credential(&env, &id);
        if credential.suspended {
            return Err(IdentityError::CredentialSuspended);
        }
        Ok(credential.attributes.contains(&attribute))
    }

    fn attributes(env: Env, id: Address) -> Result<Vec<Symbol>, IdentityError> {
        let credential = load_credential(&env, &id);
        if credential.suspended {
            return Err(IdentityError::CredentialSuspended);
        }
        Ok(credential.attributes)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn require_authority(env: &Env) -> Result<(), IdentityError> {
    let authority: Address = env
        .storage()
        .instance()
        .get(&DataKey::Authority)
        .ok_or(IdentityError::NotInitialized)?;
    authority.require_auth();
    Ok(())
}

fn load_credential(env: &Env, id: &Address) -> Credential {
    env.storage()
        .persistent()
        .get(&DataKey::Credential(id.clone()))
        .unwrap_or_else(|| Credential {
            attributes: Vec::new(env),
            suspended: false,
        })
}

fn store_credential(env: &Env, id: &Address, credential: &Credential) {
    let key = DataKey::Credential(id.clone());
    env.storage().persistent().set(&key, credential);
    env.storage().persistent().extend_ttl(
        &key,
        CREDENTIAL_LIFETIME_THRESHOLD,
        CREDENTIAL_BUMP_AMOUNT,
    );
}
