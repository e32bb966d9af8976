use crate::{AuthError, Result as AuthErrorResult};

use acct_core::Account;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session JWT claims. The session layer carries exactly the three
/// app-level fields produced by reconciliation; nothing is re-derived
/// from the store while the token lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (canonical account id)
    pub sub: String,
    /// Display name attached at reconciliation time
    pub username: String,
    /// Whether the account is linked to an external identity
    pub linked: bool,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl SessionClaims {
    /// Build claims for a freshly reconciled account.
    pub fn for_account(account: &Account, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: account.id.to_string(),
            username: account.username.clone(),
            linked: account.is_linked,
            exp: now + ttl_secs,
            iat: now,
        }
    }

    /// Validate claim shape after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (account id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.username.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "username".to_string(),
                message: "username cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
