use identity_registry::{IdentityRegistry, IdentityRegistryClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use crate::{Semantics, TokenLedger, TokenLedgerClient, ADMIN_ATTRIBUTE};

mod literal;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) struct TestLedger {
    pub env: Env,
    pub contract_id: Address,
    pub admin: Address,
    pub identity: IdentityRegistryClient<'static>,
    pub client: TokenLedgerClient<'static>,
}

impl TestLedger {
    /// Fresh account with no claims.
    pub fn account(&self) -> Address {
        Address::generate(&self.env)
    }

    /// Fresh account holding the admin claim.
    pub fn admin_account(&self) -> Address {
        let admin = self.account();
        self.identity.grant_attribute(&admin, &ADMIN_ATTRIBUTE);
        admin
    }

    pub fn balance_of(&self, account: &Address) -> i128 {
        self.client.balance(account).amount
    }

    pub fn sum_of(&self, accounts: &[Address]) -> i128 {
        accounts.iter().map(|account| self.balance_of(account)).sum()
    }
}

/// Register the identity registry and the ledger, and bind them.
/// The ledger is configured but not initialised.
pub(crate) fn setup(semantics: Semantics) -> TestLedger {
    let env = Env::default();
    env.mock_all_auths();

    let identity_id = env.register_contract(None, IdentityRegistry);
    let identity = IdentityRegistryClient::new(&env, &identity_id);
    identity.initialize(&Address::generate(&env));

    let admin = Address::generate(&env);
    identity.grant_attribute(&admin, &ADMIN_ATTRIBUTE);

    let contract_id = env.register_contract(None, TokenLedger);
    let client = TokenLedgerClient::new(&env, &contract_id);
    client.configure(&identity_id, &semantics);

    TestLedger {
        env,
        contract_id,
        admin,
        identity,
        client,
    }
}

/// As [`setup`], then `initialize` by the admin.
pub(crate) fn setup_initialized(semantics: Semantics) -> TestLedger {
    let ledger = setup(semantics);
    ledger.client.initialize(&ledger.admin);
    ledger
}
