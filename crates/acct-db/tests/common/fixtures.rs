#![allow(dead_code)]

use acct_core::Account;

/// Creates a test anonymous Account
pub fn create_anonymous_account(anonymous_id: &str) -> Account {
    Account::new_anonymous(anonymous_id, "TestAnon1".to_string())
}

/// Creates a test linked Account
pub fn create_linked_account(email: &str, external_id: &str) -> Account {
    Account::new_linked(email, external_id, "TestLinked1".to_string())
}
