//! Session introspection endpoint.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use error_location::ErrorLocation;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub account_id: String,
    pub username: String,
    pub is_linked: bool,
}

/// GET /api/session
///
/// Echo the validated session claims. Nothing is re-derived from the
/// store; the token carries the session for its whole lifetime.
pub async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionResponse>> {
    let token = bearer_token(&headers).ok_or_else(|| ApiError::Unauthorized {
        message: "Missing bearer token".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let claims = state.session_validator.validate(token)?;

    Ok(Json(SessionResponse {
        account_id: claims.sub,
        username: claims.username,
        is_linked: claims.linked,
    }))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
