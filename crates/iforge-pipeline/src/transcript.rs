//! Transcript acquisition.
//!
//! The transcript service is an opaque text source behind a trait; the
//! pipeline only needs video-id extraction and a fetch call. Failures
//! surface as the "transcript unavailable" job condition.

use std::time::Duration;

use async_trait::async_trait;
use regex_lite::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PipelineError, PipelineResult};

/// Extract the video ID from a watch/short/embed URL.
pub fn extract_video_id(url: &str) -> PipelineResult<String> {
    let patterns = [
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)",
        r"youtube\.com/watch\?.*v=([^&\n?#]+)",
    ];

    for pattern in patterns {
        let re = Regex::new(pattern).expect("valid video id pattern");
        if let Some(caps) = re.captures(url) {
            if let Some(id) = caps.get(1) {
                return Ok(id.as_str().to_string());
            }
        }
    }

    Err(PipelineError::invalid_url(url))
}

/// Opaque transcript text source.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the transcript text for a video.
    async fn fetch(&self, video_id: &str) -> PipelineResult<String>;
}

/// Configuration for the HTTP transcript source.
#[derive(Debug, Clone)]
pub struct TranscriptConfig {
    /// Base URL of the transcript service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8002".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl TranscriptConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("TRANSCRIPT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8002".to_string()),
            timeout: Duration::from_secs(
                std::env::var("TRANSCRIPT_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    transcript: String,
}

/// HTTP client for the transcript service.
pub struct HttpTranscriptSource {
    http: Client,
    config: TranscriptConfig,
}

impl HttpTranscriptSource {
    /// Create a new transcript source.
    pub fn new(config: TranscriptConfig) -> PipelineResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PipelineError::transcript_unavailable(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> PipelineResult<Self> {
        Self::new(TranscriptConfig::from_env())
    }
}

#[async_trait]
impl TranscriptSource for HttpTranscriptSource {
    async fn fetch(&self, video_id: &str) -> PipelineResult<String> {
        let url = format!("{}/transcripts/{}", self.config.base_url, video_id);

        debug!("Fetching transcript from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PipelineError::transcript_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Transcript service returned {} for {}", status, video_id);
            return Err(PipelineError::transcript_unavailable(format!(
                "transcript service returned {status}"
            )));
        }

        let body: TranscriptResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::transcript_unavailable(e.to_string()))?;

        if body.transcript.trim().is_empty() {
            return Err(PipelineError::transcript_unavailable(
                "empty transcript received",
            ));
        }

        Ok(body.transcript)
    }
}
