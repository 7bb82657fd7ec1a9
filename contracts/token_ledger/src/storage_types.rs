use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

// ---------------------------------------------------------------------------
// Platform constants
// ---------------------------------------------------------------------------

/// Upper bound on `TokenDescriptor::total_supply`.
pub const MAX_SUPPLY: i128 = 200_000_000;

pub const INITIAL_NAME: &str = "BNB-Token";
pub const INITIAL_SYMBOL: &str = "BNB";
pub const INITIAL_DECIMALS: u32 = 18;
pub const INITIAL_SUPPLY: i128 = 10_000;

/// Attribute the identity service must report for privileged callers.
pub const ADMIN_ATTRIBUTE: Symbol = symbol_short!("admin");

// ---------------------------------------------------------------------------
// Ledger TTL constants
// ---------------------------------------------------------------------------

/// Each ledger is ~5 s, so 17_280 ≈ 1 day.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// The single global token descriptor. `decimals` is informational only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenDescriptor {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: i128,
}

/// Amount record shared by account balances and allowances.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Balance {
    pub amount: i128,
}

impl Balance {
    pub fn zero() -> Self {
        Balance { amount: 0 }
    }
}

/// How the allowance operations relate to balances.
///
/// `Conserving` keeps `sum(balances) == total_supply`. Under `Literal`,
/// `transfer_from` consumes allowance without debiting the owner and
/// `transfer` accepts any caller.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Semantics {
    Conserving = 0,
    Literal = 1,
}

/// Written once at deployment by `configure`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Contract answering `has_attribute(id, attribute)`.
    pub identity: Address,
    pub semantics: Semantics,
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Allowance lookup key, ordered (owner, spender).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}

/// Storage key space for the token ledger.
///
/// - `Config`                  → `LedgerConfig`    (Instance)
/// - `Token`                   → `TokenDescriptor` (Instance)
/// - `Balance(Address)`        → `Balance`         (Persistent)
/// - `Allowance(AllowanceKey)` → `Balance`         (Persistent)
///
/// The host serialises keys to XDR, so the variant tag namespaces
/// allowances apart from balances without any string concatenation.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Token,
    Balance(Address),
    Allowance(AllowanceKey),
}
