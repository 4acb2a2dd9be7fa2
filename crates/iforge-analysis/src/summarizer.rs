//! Summarizer capability.
//!
//! The pipeline treats summarization as an optional external capability:
//! a real LLM-backed implementation and an always-unavailable one are
//! selected at wiring time. Callers fall back to `extract_basic` when
//! `summarize` fails for any reason.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use iforge_models::AnalysisDraft;

use crate::error::{AnalysisError, AnalysisResult};

/// Longest transcript prefix sent to the model, in characters.
const MAX_PROMPT_CHARS: usize = 12_000;

/// Summarization capability over raw transcript text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a best-effort structured draft for the given text.
    async fn summarize(&self, text: &str) -> AnalysisResult<AnalysisDraft>;
}

/// Configuration for the LLM summarizer.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Base URL of the generative API
    pub base_url: String,
    /// API key
    pub api_key: String,
    /// Models to try, in order
    pub models: Vec<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl SummarizerConfig {
    /// Create config from environment variables. Returns `None` when no
    /// API key is configured, which selects the unavailable wiring.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("SUMMARIZER_API_KEY").ok().filter(|k| !k.is_empty())?;

        Some(Self {
            base_url: std::env::var("SUMMARIZER_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            api_key,
            models: std::env::var("SUMMARIZER_MODELS")
                .map(|s| s.split(',').map(|m| m.trim().to_string()).collect())
                .unwrap_or_else(|_| {
                    vec![
                        "gemini-2.5-flash".to_string(),
                        "gemini-2.5-flash-lite".to_string(),
                        "gemini-2.5-pro".to_string(),
                    ]
                }),
            timeout: Duration::from_secs(
                std::env::var("SUMMARIZER_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        })
    }
}

/// LLM-backed summarizer.
pub struct LlmSummarizer {
    http: Client,
    config: SummarizerConfig,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

impl LlmSummarizer {
    /// Create a new summarizer.
    pub fn new(config: SummarizerConfig) -> AnalysisResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AnalysisError::Network)?;

        Ok(Self { http, config })
    }

    /// Build the analysis prompt.
    fn build_prompt(&self, transcript: &str) -> String {
        format!(
            r#"Analyze this video transcript and create infographic content.

REQUIREMENTS:
1. Create a compelling main title (max 80 characters)
2. Generate exactly 5-6 key takeaway points (each 15-25 words)
3. Extract 3-4 statistics or data points if available
4. Find 1-2 memorable quotes if present
5. Determine the content category

Return ONLY valid JSON in this exact format:
{{
    "mainTitle": "Compelling title here",
    "keyPoints": ["First point", "Second point", "Third point", "Fourth point", "Fifth point"],
    "statistics": [{{"label": "Metric name", "value": "Number/percentage", "percentage": 75}}],
    "quotes": ["Notable quote from the video"],
    "category": "business|education|technology|health|finance|lifestyle",
    "summary": "2-3 sentence summary of the main topic"
}}

TRANSCRIPT:
{transcript}
"#
        )
    }

    /// Call one model.
    async fn call_model(&self, model: &str, prompt: &str) -> AnalysisResult<AnalysisDraft> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, model, self.config.api_key
        );

        debug!("Sending summarization request to model {}", model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::request_failed(format!(
                "summarizer returned {}: {}",
                status, body
            )));
        }

        let generate_response: GenerateResponse = response.json().await?;

        let text = generate_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| AnalysisError::malformed("no content in response"))?;

        parse_draft_json(text)
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, text: &str) -> AnalysisResult<AnalysisDraft> {
        let truncated: String = if text.chars().count() > MAX_PROMPT_CHARS {
            let head: String = text.chars().take(MAX_PROMPT_CHARS).collect();
            format!("{head}...")
        } else {
            text.to_string()
        };

        let prompt = self.build_prompt(&truncated);

        let mut last_error = None;
        for model in &self.config.models {
            match self.call_model(model, &prompt).await {
                Ok(mut draft) => {
                    info!("Summarizer succeeded with model {}", model);
                    draft.word_count = Some(text.split_whitespace().count());
                    draft.transcript_length = Some(text.chars().count());
                    return Ok(draft);
                }
                Err(e) => {
                    warn!("Summarizer model {} failed: {}", model, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AnalysisError::unavailable("no summarizer models configured")))
    }
}

/// Parse a model response into a draft, tolerating markdown code fences.
fn parse_draft_json(text: &str) -> AnalysisResult<AnalysisDraft> {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);

    serde_json::from_str(text.trim())
        .map_err(|e| AnalysisError::malformed(format!("draft JSON did not parse: {e}")))
}

/// Summarizer wiring for deployments without a configured LLM. Always
/// fails, which routes callers to the deterministic extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSummarizer;

#[async_trait]
impl Summarizer for UnavailableSummarizer {
    async fn summarize(&self, _text: &str) -> AnalysisResult<AnalysisDraft> {
        Err(AnalysisError::unavailable("summarizer not configured"))
    }
}
