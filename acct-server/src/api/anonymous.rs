//! Anonymous bootstrap endpoint.
//!
//! Runs on every page load. Anonymous tracking is a best-effort
//! enhancement: no failure here may block the client, so errors are
//! logged and absorbed rather than surfaced.

use crate::api::cookie::{self, ANONYMOUS_COOKIE};
use crate::state::AppState;

use acct_db::AccountRepository;
use acct_identity::AnonymousIssuer;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use log::warn;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousSessionResponse {
    pub anonymous_id: String,
    pub created: bool,
}

/// POST /api/session/anonymous
///
/// Reads the anonymous cookie, minting a fresh token (and Set-Cookie)
/// when absent, and makes sure an account row exists for it.
pub async fn bootstrap_anonymous(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let (anonymous_id, minted) = match cookie::read_cookie(&headers, ANONYMOUS_COOKIE) {
        Some(value) => (value, false),
        None => (Uuid::new_v4().to_string(), true),
    };

    let issuer = AnonymousIssuer::new(AccountRepository::new(state.pool.clone()));

    let created = match issuer.ensure_account(&anonymous_id).await {
        Ok(outcome) => outcome.created,
        Err(e) => {
            // Best effort: the page flow continues without a persisted
            // anonymous account.
            warn!("Anonymous account bootstrap failed: {}", e);
            false
        }
    };

    let body = Json(AnonymousSessionResponse {
        anonymous_id: anonymous_id.clone(),
        created,
    });

    let mut response = (StatusCode::OK, body).into_response();
    if minted {
        let set_cookie =
            cookie::anonymous_set_cookie(&anonymous_id, state.anon_cookie_max_age_secs);
        if let Ok(value) = HeaderValue::from_str(&set_cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}
