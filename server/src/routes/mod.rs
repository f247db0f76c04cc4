use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::{confirmation, health_check, pasti_options, show_form, submit};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(show_form))
        .route("/tabarruat", get(show_form).post(submit))
        .route("/tabarruat/berjaya", get(confirmation))
        .route("/api/pasti-options", get(pasti_options))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(config.production))
        .layer(create_cors_layer(&config.cors_allowed_origins))
}
