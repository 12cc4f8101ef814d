//! Axon Gateway: the HTTP face of the game client's backend boundary.
//!
//! Each route mirrors one client action: validate the input, resolve the
//! caller IP and session cookie, forward to a repository, and shape the
//! reply envelope the client expects. Transport failures never escape to
//! the caller unshaped.

pub mod api;
pub mod ip;
pub mod session;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod validate;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use tower_http::trace::TraceLayer;

/// Builds the gateway router over the injected application state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(api::auth::register))
        .route("/api/auth/verify", post(api::auth::verify_user))
        .route("/api/auth/resend", post(api::auth::resend_code))
        .route("/api/auth/login", post(api::auth::login))
        .route("/api/auth/me", get(api::auth::me))
        .route("/api/auth/logout", post(api::auth::logout))
        .route("/api/economy/corporation", get(api::economy::corporation))
        .route("/api/economy/buildings", post(api::economy::buildings))
        .route("/api/economy/businesses", post(api::economy::businesses))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
