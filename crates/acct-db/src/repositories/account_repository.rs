//! Account repository: point lookups by unique column, insert with a
//! caller-generated id, and the single in-place update that links an
//! account to an external identity.
//!
//! Rows are never deleted. The issuer path only inserts; the
//! reconciler path is the only caller of `link`.

use crate::{DbError, Result as DbErrorResult};

use acct_core::Account;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, account: &Account) -> DbErrorResult<()> {
        let id = account.id.to_string();
        let is_linked = account.is_linked as i64;
        let created_at = account.created_at.timestamp();
        let updated_at = account.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO accounts (
                    id, email, username, is_linked, anonymous_id, external_id,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&account.email)
        .bind(&account.username)
        .bind(is_linked)
        .bind(&account.anonymous_id)
        .bind(&account.external_id)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Account>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, email, username, is_linked, anonymous_id, external_id,
                    created_at, updated_at
                FROM accounts
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    pub async fn find_by_anonymous_id(&self, anonymous_id: &str) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, username, is_linked, anonymous_id, external_id,
                    created_at, updated_at
                FROM accounts
                WHERE anonymous_id = ?
            "#,
        )
        .bind(anonymous_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    /// Find the account matching either side of an authenticated
    /// principal. Each column is individually unique, so at most one
    /// row matches per side; when both sides match different rows the
    /// first row wins, mirroring the lookup order of the callers.
    pub async fn find_by_external_identity(
        &self,
        email: &str,
        external_id: &str,
    ) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, username, is_linked, anonymous_id, external_id,
                    created_at, updated_at
                FROM accounts
                WHERE email = ? OR external_id = ?
            "#,
        )
        .bind(email)
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    /// Persist the linking update for `account`: email, external id,
    /// linked flag and the refreshed `updated_at`. The row id never
    /// changes; created_at, username and anonymous_id are left as-is.
    pub async fn link(&self, account: &Account) -> DbErrorResult<()> {
        let id = account.id.to_string();
        let is_linked = account.is_linked as i64;
        let updated_at = account.updated_at.timestamp();

        sqlx::query(
            r#"
                UPDATE accounts
                SET email = ?, external_id = ?, is_linked = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&account.email)
        .bind(&account.external_id)
        .bind(is_linked)
        .bind(updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn account_from_row(row: &SqliteRow) -> DbErrorResult<Account> {
    let id: String = row.try_get("id")?;
    let email: Option<String> = row.try_get("email")?;
    let username: String = row.try_get("username")?;
    let is_linked: i64 = row.try_get("is_linked")?;
    let anonymous_id: Option<String> = row.try_get("anonymous_id")?;
    let external_id: Option<String> = row.try_get("external_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Account {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in accounts.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email,
        username,
        is_linked: is_linked != 0,
        anonymous_id,
        external_id,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in accounts.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in accounts.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
