use acct_auth::AuthError;
use acct_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure taxonomy for the two identity operations. Callers decide
/// policy per operation: issuer failures are log-and-continue, any
/// reconciler failure aborts the authentication attempt.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Authorization denied: {source} {location}")]
    AuthorizationDenied {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for IdentityError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::AuthorizationDenied {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
