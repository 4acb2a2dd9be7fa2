//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::health::health;
use crate::handlers::icons::search_icons;
use crate::handlers::infographics::{
    generate, generate_with_template, get_infographic, get_status,
};
use crate::handlers::templates::{get_template_coordinates, list_templates};
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/generate", post(generate))
        .route("/status/:job_id", get(get_status))
        .route("/infographic/:job_id", get(get_infographic))
        .route("/infographic/generate-with-template", post(generate_with_template))
        .route("/templates", get(list_templates))
        .route("/templates/:template_id/coordinates", get(get_template_coordinates))
        .route("/icons/search", post(search_icons))
        .route("/health", get(health));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
