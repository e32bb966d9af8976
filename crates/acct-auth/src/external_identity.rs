//! The authenticated principal as disclosed by the identity provider.
//!
//! The provider is a trusted collaborator: nothing is verified here
//! beyond requiring that a stable id and an email actually exist.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    /// Provider-issued stable identifier for the principal.
    pub external_id: String,
    pub email: String,
}

impl ExternalIdentity {
    #[track_caller]
    pub fn new(
        external_id: impl Into<String>,
        email: impl Into<String>,
    ) -> AuthErrorResult<Self> {
        let external_id = external_id.into();
        let email = email.into();

        if external_id.is_empty() {
            return Err(AuthError::MissingExternalId {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if email.is_empty() {
            return Err(AuthError::MissingEmail {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { external_id, email })
    }

    /// Resolve the stable id from a provider callback payload: the
    /// provider account id when present, else the token subject.
    /// Without either, session creation must not proceed.
    #[track_caller]
    pub fn from_provider(
        provider_account_id: Option<&str>,
        subject: Option<&str>,
        email: Option<&str>,
    ) -> AuthErrorResult<Self> {
        let external_id = provider_account_id
            .filter(|s| !s.is_empty())
            .or_else(|| subject.filter(|s| !s.is_empty()))
            .ok_or_else(|| AuthError::MissingExternalId {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let email = email
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::MissingEmail {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Self::new(external_id, email)
    }
}
