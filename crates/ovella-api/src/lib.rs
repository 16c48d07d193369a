//! ovella-api
//!
//! HTTP surface for the risk-assessment core. Auth and rate limiting are
//! handled upstream by the platform; persistence happens downstream. This
//! service validates, predicts, and hands the result back.

pub mod audit;
pub mod error;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/predict", post(routes::predict::predict))
        .route("/summary", post(routes::advice::summary))
        .route("/recommendations", post(routes::advice::recommendations))
        .layer(axum_mw::from_fn(audit::audit_log))
        .layer(cors)
        .with_state(state)
}
