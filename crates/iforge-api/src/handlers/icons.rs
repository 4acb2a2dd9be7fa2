//! Icon search handler.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use iforge_models::IconCandidate;

use crate::state::AppState;

/// Default result count for icon searches.
const DEFAULT_SEARCH_LIMIT: usize = 6;

/// Icon search request.
#[derive(Deserialize)]
pub struct IconSearchRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Icon search response.
#[derive(Serialize)]
pub struct IconSearchResponse {
    pub icons: Vec<IconCandidate>,
}

/// Search for relevant icons.
pub async fn search_icons(
    State(state): State<AppState>,
    Json(request): Json<IconSearchRequest>,
) -> Json<IconSearchResponse> {
    let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

    let icons = state
        .pipeline
        .ranker
        .rank(&request.content, request.category.as_deref(), limit)
        .await;

    Json(IconSearchResponse { icons })
}
