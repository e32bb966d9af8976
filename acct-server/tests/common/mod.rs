#![allow(dead_code)]

//! Test infrastructure for acct-server API tests

use acct_server::{AppState, Config};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    acct_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    let config = Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_path: ":memory:".into(),
        jwt_secret: "test-secret-key-at-least-32-bytes".to_string(),
        session_ttl_secs: 86_400,
        anon_cookie_max_age_secs: 31_536_000,
        log_level: log::LevelFilter::Info,
        log_colored: false,
    };

    AppState::new(pool, &config)
}

/// Count rows in the accounts table
pub async fn count_accounts(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await
        .expect("Failed to count accounts")
}
