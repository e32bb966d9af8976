//! Account entity - the single persisted identity record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One account per underlying person. An account starts anonymous
/// (identified only by a client-held token) and may later be linked to
/// an external authenticated identity. The `is_linked` flag is
/// monotonic: it moves false to true exactly once and never back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Present only once the account is linked. Unique across accounts.
    pub email: Option<String>,
    /// Display name; auto-generated when the provider supplies none.
    pub username: String,
    pub is_linked: bool,
    /// Client-generated token used before authentication. Kept after
    /// linking as a historical trace, never reused for a second row.
    pub anonymous_id: Option<String>,
    /// Provider-issued stable identifier. Unique across accounts.
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new anonymous account for a client-held token.
    pub fn new_anonymous(anonymous_id: impl Into<String>, username: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: None,
            username,
            is_linked: false,
            anonymous_id: Some(anonymous_id.into()),
            external_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new linked account with no anonymous history.
    pub fn new_linked(
        email: impl Into<String>,
        external_id: impl Into<String>,
        username: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: Some(email.into()),
            username,
            is_linked: true,
            anonymous_id: None,
            external_id: Some(external_id.into()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the account is still anonymous-only
    pub fn is_anonymous(&self) -> bool {
        !self.is_linked
    }
}
