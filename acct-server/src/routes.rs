use crate::{api, health, state::AppState};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Identity endpoints
        .route(
            "/api/session/anonymous",
            post(api::anonymous::bootstrap_anonymous),
        )
        .route("/api/auth/callback", post(api::callback::auth_callback))
        .route("/api/session", get(api::session::current_session))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
