//! Template handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use iforge_models::{Template, TemplateSchema};

use crate::error::ApiResult;
use crate::state::AppState;

/// Template list response.
#[derive(Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<Template>,
}

/// List all provisioned templates.
pub async fn list_templates(State(state): State<AppState>) -> Json<TemplatesResponse> {
    let templates = state
        .pipeline
        .templates
        .list()
        .into_iter()
        .cloned()
        .collect();

    Json(TemplatesResponse { templates })
}

/// Get the full coordinate schema for one template.
pub async fn get_template_coordinates(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> ApiResult<Json<TemplateSchema>> {
    let schema = state.pipeline.templates.get_schema(&template_id)?;
    Ok(Json(schema.clone()))
}
