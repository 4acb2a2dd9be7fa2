//! Application state.

use iforge_analysis::SummarizerConfig;
use iforge_pipeline::ProcessingContext;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub pipeline: ProcessingContext,
    pub summarizer_configured: bool,
}

impl AppState {
    /// Create new application state wired from the environment.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let pipeline = ProcessingContext::from_env()
            .map_err(|e| anyhow::anyhow!("failed to wire pipeline: {e}"))?;

        Ok(Self {
            config,
            pipeline,
            summarizer_configured: SummarizerConfig::from_env().is_some(),
        })
    }

    /// Create state over an explicit pipeline context (used by tests).
    pub fn with_pipeline(config: ApiConfig, pipeline: ProcessingContext) -> Self {
        Self {
            config,
            pipeline,
            summarizer_configured: false,
        }
    }
}
