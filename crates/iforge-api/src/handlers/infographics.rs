//! Generation, status and retrieval handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use iforge_models::{InfographicRecord, JobId, JobStatus, Layout};
use iforge_pipeline::{extract_video_id, generate_layout, run_job};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Generation request.
#[derive(Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    /// Optional template override; the pipeline default applies otherwise
    #[serde(default)]
    pub template_id: Option<String>,
}

/// Generation response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub job_id: JobId,
    pub message: String,
}

/// Start infographic generation. Validates the URL, records the initial
/// job status and spawns the pipeline in the background.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    // Reject unusable URLs before accepting the job.
    extract_video_id(&request.url).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let job_id = JobId::new();

    state
        .pipeline
        .jobs
        .set(
            &job_id,
            JobStatus::processing("Starting analysis...", 0, "Initializing"),
        )
        .await?;

    let ctx = state.pipeline.clone();
    let spawn_job_id = job_id.clone();
    tokio::spawn(async move {
        run_job(&ctx, spawn_job_id, request.url, request.template_id).await;
    });

    Ok(Json(GenerateResponse {
        job_id,
        message: "Processing started".to_string(),
    }))
}

/// Get processing status for a job.
pub async fn get_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<JobStatus>> {
    let job_id = JobId::from_string(job_id);

    let status = state
        .pipeline
        .jobs
        .get(&job_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    Ok(Json(status))
}

/// Get a completed infographic.
pub async fn get_infographic(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<InfographicRecord>> {
    let job_id = JobId::from_string(job_id);

    let record = state
        .pipeline
        .infographics
        .get(&job_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Infographic not found"))?;

    Ok(Json(record))
}

/// Re-mapping request.
#[derive(Deserialize)]
pub struct GenerateWithTemplateRequest {
    pub job_id: String,
    pub template_id: String,
}

/// Re-mapping response.
#[derive(Serialize)]
pub struct GenerateWithTemplateResponse {
    pub message: String,
    pub data: Layout,
}

/// Re-map an existing job's analysis onto a different template.
pub async fn generate_with_template(
    State(state): State<AppState>,
    Json(request): Json<GenerateWithTemplateRequest>,
) -> ApiResult<Json<GenerateWithTemplateResponse>> {
    let job_id = JobId::from_string(request.job_id);

    let mut record = state
        .pipeline
        .infographics
        .get(&job_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    let layout = generate_layout(&state.pipeline, &record.analysis, &request.template_id)
        .await
        .map_err(|e| match e {
            iforge_pipeline::PipelineError::Template(t) => ApiError::Template(t),
            other => ApiError::internal(other.to_string()),
        })?;

    record.template_data = layout.clone();
    record.template_type = request.template_id;
    state.pipeline.infographics.set(&job_id, record).await?;

    Ok(Json(GenerateWithTemplateResponse {
        message: "Infographic updated with new template".to_string(),
        data: layout,
    }))
}
