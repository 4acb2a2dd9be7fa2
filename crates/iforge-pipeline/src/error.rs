//! Pipeline error types.

use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    #[error("Template error: {0}")]
    Template(#[from] iforge_templates::TemplateError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Job failed: {0}")]
    JobFailed(String),
}

impl PipelineError {
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    pub fn transcript_unavailable(msg: impl Into<String>) -> Self {
        Self::TranscriptUnavailable(msg.into())
    }

    pub fn job_failed(msg: impl Into<String>) -> Self {
        Self::JobFailed(msg.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the job/infographic record stores. The in-memory
/// implementations never fail, but the abstraction admits remote ones.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
