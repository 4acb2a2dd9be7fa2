//! Pipeline configuration.

/// Per-pipeline tunables.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Shared icon pool size, sized above the total element count a
    /// template can hold
    pub icon_pool_size: usize,
    /// Characters of transcript retained on the stored record
    pub transcript_excerpt_chars: usize,
    /// Template used when a job does not name one
    pub default_template_id: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            icon_pool_size: 10,
            transcript_excerpt_chars: 500,
            default_template_id: "modern-business".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            icon_pool_size: std::env::var("PIPELINE_ICON_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            transcript_excerpt_chars: std::env::var("PIPELINE_TRANSCRIPT_EXCERPT_CHARS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(500),
            default_template_id: std::env::var("PIPELINE_DEFAULT_TEMPLATE")
                .unwrap_or_else(|_| "modern-business".to_string()),
        }
    }
}
