use crate::handlers;
use crate::middleware::cors_layer;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dig", get(handlers::dig))
        .with_state(state)
}

/// Full application: the API under `/api`, a JSON 404 everywhere else.
pub fn create_app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .fallback(handlers::not_found)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
