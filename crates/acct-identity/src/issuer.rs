//! Anonymous identity issuer.
//!
//! Guarantees that a client-held anonymous token has exactly one
//! account row behind it. Runs on every page load, so the common case
//! is a single read and no write.

use crate::{IdentityError, Result as IdentityResult};

use acct_core::{Account, username};
use acct_db::AccountRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;

/// Result of an `ensure_account` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnsureOutcome {
    /// True when this call inserted the account row.
    pub created: bool,
}

pub struct AnonymousIssuer {
    accounts: AccountRepository,
}

impl AnonymousIssuer {
    pub fn new(accounts: AccountRepository) -> Self {
        Self { accounts }
    }

    /// Ensure an account row exists for `anonymous_id`.
    ///
    /// Idempotent: at most one insert ever happens per distinct id,
    /// and there is no update path. A losing racer on the first
    /// insert hits the winner's unique constraint; that is absorbed
    /// and reported as `created: false`.
    pub async fn ensure_account(&self, anonymous_id: &str) -> IdentityResult<EnsureOutcome> {
        if anonymous_id.is_empty() {
            return Err(IdentityError::Validation {
                message: "anonymous id must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self
            .accounts
            .find_by_anonymous_id(anonymous_id)
            .await?
            .is_some()
        {
            debug!("Anonymous account already exists for {}", anonymous_id);
            return Ok(EnsureOutcome { created: false });
        }

        let account = Account::new_anonymous(anonymous_id, username::generate());
        match self.accounts.insert(&account).await {
            Ok(()) => {
                debug!(
                    "Created anonymous account {} for {}",
                    account.id, anonymous_id
                );
                Ok(EnsureOutcome { created: true })
            }
            Err(e) if e.is_unique_violation() => {
                // Duplicate-initialization race: another request inserted
                // the same id between our lookup and insert. The winner's
                // row is the one we wanted anyway.
                debug!("Lost anonymous insert race for {}", anonymous_id);
                Ok(EnsureOutcome { created: false })
            }
            Err(e) => Err(e.into()),
        }
    }
}
