use soroban_sdk::contracterror;

/// Typed errors returned by the token ledger.
///
/// Codes are part of the contract interface; never renumber.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TokenError {
    /// Caller lacks the admin claim, is not the account it acts for, or the
    /// identity lookup itself failed.
    Unauthorized = 1,
    /// The token descriptor has not been initialised.
    NotFound = 2,
    InsufficientBalance = 3,
    InsufficientAllowance = 4,
    /// Burn amount exceeds the total supply.
    InsufficientSupply = 5,
    /// Mint would push the total supply above `MAX_SUPPLY`.
    CapacityExceeded = 6,
    /// A stored record did not decode into its expected shape.
    Serialization = 7,
    /// Reserved. Store failures and version conflicts abort the invocation
    /// inside the host before contract code can observe them.
    StateStore = 8,
    /// Amounts must be non-negative.
    InvalidAmount = 9,
    Overflow = 10,
    AlreadyInitialized = 11,
    /// `configure` has not been called.
    NotConfigured = 12,
    AlreadyConfigured = 13,
}
