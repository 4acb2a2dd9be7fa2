//! Job identity, status and the completed infographic record.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::content::ContentAnalysis;
use crate::layout::Layout;

/// Unique job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Generate a fresh job ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a processing job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Processing,
    Completed,
    Error,
}

impl JobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Processing => "processing",
            JobState::Completed => "completed",
            JobState::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Error)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-job status record polled by clients.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobStatus {
    #[serde(rename = "status")]
    pub state: JobState,

    /// Human-readable stage narration
    pub stage: String,

    /// Progress 0-100
    pub progress: u8,

    /// Detail message
    pub message: String,
}

impl JobStatus {
    pub fn processing(
        stage: impl Into<String>,
        progress: u8,
        message: impl Into<String>,
    ) -> Self {
        Self {
            state: JobState::Processing,
            stage: stage.into(),
            progress: progress.min(100),
            message: message.into(),
        }
    }

    pub fn completed(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            state: JobState::Completed,
            stage: stage.into(),
            progress: 100,
            message: message.into(),
        }
    }

    pub fn error(stage: impl Into<String>, progress: u8, message: impl Into<String>) -> Self {
        Self {
            state: JobState::Error,
            stage: stage.into(),
            progress: progress.min(100),
            message: message.into(),
        }
    }
}

/// A completed infographic: analysis plus mapped layout, retained for
/// retrieval and re-mapping onto other templates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfographicRecord {
    /// Job ID this record belongs to
    pub id: JobId,

    /// Source video ID
    pub video_id: String,

    /// Source URL
    pub source_url: String,

    /// Normalized content analysis
    pub analysis: ContentAnalysis,

    /// Mapped layout for the current template
    pub template_data: Layout,

    /// ID of the template the layout was mapped onto
    pub template_type: String,

    /// Leading excerpt of the source transcript (at most 500 characters)
    pub transcript_excerpt: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_unique() {
        assert_ne!(JobId::new(), JobId::new());
    }

    #[test]
    fn test_status_serializes_python_compatible_keys() {
        let status = JobStatus::processing("Downloading transcript...", 25, "Fetching");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "processing");
        assert_eq!(json["stage"], "Downloading transcript...");
        assert_eq!(json["progress"], 25);
    }

    #[test]
    fn test_status_clamps_progress() {
        let status = JobStatus::processing("stage", 150, "msg");
        assert_eq!(status.progress, 100);
        assert!(!status.state.is_terminal());
        assert!(JobStatus::completed("done", "ok").state.is_terminal());
    }
}
