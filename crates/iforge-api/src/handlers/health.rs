//! Health check handlers.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub services: HashMap<String, String>,
}

/// Health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut services = HashMap::new();
    services.insert("icon_index".to_string(), "configured".to_string());
    services.insert(
        "templates".to_string(),
        format!("{} provisioned", state.pipeline.templates.len()),
    );
    services.insert(
        "summarizer".to_string(),
        if state.summarizer_configured {
            "connected".to_string()
        } else {
            "not configured".to_string()
        },
    );

    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "InfoForge API is running".to_string(),
        services,
    })
}
