//! API route configuration.

use crate::api::handlers::{health_handler, login_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /`      - Health check, plain text
/// - `POST /login` - Credential check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health_handler))
        .route("/login", post(login_handler))
}
