//! Authentication callback endpoint.
//!
//! Invoked by the sign-in layer after the provider handshake has
//! succeeded. Reconciles the authenticated principal against the
//! account store and issues the session token. Unlike the anonymous
//! bootstrap, every failure here aborts the attempt: no partial
//! session is ever issued.

use crate::api::cookie::{self, ANONYMOUS_COOKIE};
use crate::api::error::Result as ApiResult;
use crate::state::AppState;

use acct_auth::{ExternalIdentity, SessionClaims};
use acct_db::AccountRepository;
use acct_identity::IdentityReconciler;

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};

/// Provider result as relayed by the sign-in layer. Trusted input;
/// the stable id is the provider account id when present, else the
/// token subject.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCallbackRequest {
    pub provider_account_id: Option<String>,
    pub sub: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCallbackResponse {
    pub token: String,
    pub account_id: String,
    pub username: String,
    pub is_linked: bool,
}

/// POST /api/auth/callback
pub async fn auth_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AuthCallbackRequest>,
) -> ApiResult<Json<AuthCallbackResponse>> {
    let identity = ExternalIdentity::from_provider(
        request.provider_account_id.as_deref(),
        request.sub.as_deref(),
        request.email.as_deref(),
    )?;

    let anonymous_id = cookie::read_cookie(&headers, ANONYMOUS_COOKIE);

    let reconciler = IdentityReconciler::new(AccountRepository::new(state.pool.clone()));
    let account = reconciler
        .reconcile(&identity, anonymous_id.as_deref())
        .await?;

    let claims = SessionClaims::for_account(&account, state.session_ttl_secs);
    let token = state.session_issuer.issue(&claims)?;

    Ok(Json(AuthCallbackResponse {
        token,
        account_id: account.id.to_string(),
        username: account.username,
        is_linked: account.is_linked,
    }))
}
