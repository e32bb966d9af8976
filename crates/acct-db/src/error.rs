use acct_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        // Unique-constraint rejections get their own variant so callers
        // can tell a benign insert race apart from a broken store.
        if let sqlx::Error::Database(ref db) = source {
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                return Self::UniqueViolation {
                    message: db.message().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                };
            }
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
