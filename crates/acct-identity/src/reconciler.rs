//! Identity reconciler.
//!
//! Resolves an authenticated principal to exactly one canonical
//! account. The decision procedure is three ordered steps with fixed
//! precedence: an already-linked match wins over anonymous
//! conversion, and conversion wins over fresh creation. Each step
//! runs to completion before the next; step 3 depends on the negative
//! outcome of steps 1 and 2.

use crate::Result as IdentityResult;

use acct_auth::ExternalIdentity;
use acct_core::{Account, username};
use acct_db::AccountRepository;

use chrono::Utc;
use log::{debug, info};

pub struct IdentityReconciler {
    accounts: AccountRepository,
}

impl IdentityReconciler {
    pub fn new(accounts: AccountRepository) -> Self {
        Self { accounts }
    }

    /// Resolve `identity` to its canonical account, converting the
    /// anonymous account behind `anonymous_id` when one applies.
    ///
    /// Invoked once per successful external-authentication event,
    /// before the session is issued. Any storage failure aborts the
    /// attempt; nothing is retried here - the user re-authenticates.
    pub async fn reconcile(
        &self,
        identity: &ExternalIdentity,
        anonymous_id: Option<&str>,
    ) -> IdentityResult<Account> {
        // Step 1: an already-linked account for this identity is
        // canonical. Repeat logins end here with no write.
        if let Some(existing) = self
            .accounts
            .find_by_external_identity(&identity.email, &identity.external_id)
            .await?
        {
            if existing.is_linked {
                debug!(
                    "Reconciled {} to existing linked account {}",
                    identity.external_id, existing.id
                );
                return Ok(existing);
            }
        }

        // Step 2: convert the caller's anonymous account in place.
        // The row id is preserved, so data keyed by it survives the
        // upgrade untouched. A linked row never converts again; its
        // anonymous id is a historical trace only.
        if let Some(anonymous_id) = anonymous_id {
            if let Some(account) = self.accounts.find_by_anonymous_id(anonymous_id).await? {
                if !account.is_linked {
                    let mut converted = account;
                    converted.email = Some(identity.email.clone());
                    converted.external_id = Some(identity.external_id.clone());
                    converted.is_linked = true;
                    converted.updated_at = Utc::now();
                    self.accounts.link(&converted).await?;
                    info!(
                        "Converted anonymous account {} to linked identity {}",
                        converted.id, identity.external_id
                    );
                    return Ok(converted);
                }
            }
        }

        // Step 3: first login with no usable anonymous history.
        let account = Account::new_linked(
            identity.email.clone(),
            identity.external_id.clone(),
            username::generate(),
        );
        self.accounts.insert(&account).await?;
        info!(
            "Created linked account {} for identity {}",
            account.id, identity.external_id
        );
        Ok(account)
    }
}
