use crate::Config;

use acct_auth::{SessionIssuer, SessionValidator};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-request state. Each handler is otherwise stateless; the
/// pool and the JWT keys are the only process-wide resources.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session_issuer: Arc<SessionIssuer>,
    pub session_validator: Arc<SessionValidator>,
    pub session_ttl_secs: i64,
    pub anon_cookie_max_age_secs: i64,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            session_issuer: Arc::new(SessionIssuer::with_hs256(config.jwt_secret.as_bytes())),
            session_validator: Arc::new(SessionValidator::with_hs256(
                config.jwt_secret.as_bytes(),
            )),
            session_ttl_secs: config.session_ttl_secs,
            anon_cookie_max_age_secs: config.anon_cookie_max_age_secs,
        }
    }
}
