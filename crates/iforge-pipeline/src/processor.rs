//! Job processing logic.
//!
//! A job is one linear run: fetch transcript, analyze, normalize, fetch
//! the shared icon pool, map the layout, store the record. Staged status
//! updates are written to the job store as the run advances.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use iforge_analysis::{extract_basic, normalize, Summarizer, SummarizerConfig};
use iforge_icons::{IconIndexClient, IconRanker, IndexConfig};
use iforge_layout::{content_query, icon_suggestions, map_layout};
use iforge_models::{ContentAnalysis, InfographicRecord, JobId, JobStatus, Layout};
use iforge_templates::TemplateStore;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::job_store::{InMemoryInfographicStore, InMemoryJobStore, InfographicStore, JobStore};
use crate::transcript::{extract_video_id, HttpTranscriptSource, TranscriptSource};

/// Context for job processing. Cheap to clone; safe to share across
/// concurrently running jobs.
#[derive(Clone)]
pub struct ProcessingContext {
    pub config: PipelineConfig,
    pub templates: TemplateStore,
    pub ranker: IconRanker,
    pub summarizer: Arc<dyn Summarizer>,
    pub transcripts: Arc<dyn TranscriptSource>,
    pub jobs: Arc<dyn JobStore>,
    pub infographics: Arc<dyn InfographicStore>,
}

impl ProcessingContext {
    /// Wire a context from environment variables: HTTP icon index and
    /// transcript source, LLM summarizer when an API key is configured
    /// (unavailable wiring otherwise), in-memory stores and the built-in
    /// template set.
    pub fn from_env() -> PipelineResult<Self> {
        let index = IconIndexClient::new(IndexConfig::from_env())
            .map_err(|e| PipelineError::job_failed(e.to_string()))?;

        let summarizer: Arc<dyn Summarizer> = match SummarizerConfig::from_env() {
            Some(config) => {
                info!("Summarizer configured");
                Arc::new(
                    iforge_analysis::LlmSummarizer::new(config)
                        .map_err(|e| PipelineError::job_failed(e.to_string()))?,
                )
            }
            None => {
                info!("No summarizer configured, using fallback analysis");
                Arc::new(iforge_analysis::UnavailableSummarizer)
            }
        };

        Ok(Self {
            config: PipelineConfig::from_env(),
            templates: TemplateStore::with_builtin_templates(),
            ranker: IconRanker::new(Arc::new(index)),
            summarizer,
            transcripts: Arc::new(HttpTranscriptSource::from_env()?),
            jobs: InMemoryJobStore::new(),
            infographics: InMemoryInfographicStore::new(),
        })
    }
}

/// Analyze transcript text: summarizer first, deterministic extraction
/// when the summarizer fails or its output cannot be used.
pub async fn analyze_transcript(summarizer: &dyn Summarizer, text: &str) -> ContentAnalysis {
    match summarizer.summarize(text).await {
        Ok(draft) => normalize(draft),
        Err(e) => {
            warn!("Summarizer failed, using basic extraction: {}", e);
            normalize(extract_basic(text))
        }
    }
}

/// Fetch the shared icon pool and map content onto a template.
///
/// The pool is fetched once for the whole content analysis and shared
/// across kinds and elements; per-element selection happens inside the
/// pure mapper.
pub async fn generate_layout(
    ctx: &ProcessingContext,
    analysis: &ContentAnalysis,
    template_id: &str,
) -> PipelineResult<Layout> {
    let schema = ctx.templates.get_schema(template_id)?;

    let query = content_query(analysis);
    let pool = ctx
        .ranker
        .rank(&query, Some(analysis.category.as_str()), ctx.config.icon_pool_size)
        .await;

    Ok(map_layout(analysis, schema, &pool))
}

/// Run one job to completion, recording status transitions. Failures
/// are written to the job store as an error status, never propagated.
pub async fn run_job(ctx: &ProcessingContext, job_id: JobId, url: String, template_id: Option<String>) {
    let template_id =
        template_id.unwrap_or_else(|| ctx.config.default_template_id.clone());

    info!("Processing job {} for {}", job_id, url);

    if let Err(e) = process(ctx, &job_id, &url, &template_id).await {
        error!("Job {} failed: {}", job_id, e);

        let status = match &e {
            PipelineError::TranscriptUnavailable(_) => JobStatus::error(
                "Transcript unavailable",
                25,
                "This video doesn't have an accessible transcript. \
                 Please try a different video with captions enabled.",
            ),
            _ => JobStatus::error("Processing failed", 0, e.to_string()),
        };
        ctx.jobs.set(&job_id, status).await.ok();
    }
}

async fn process(
    ctx: &ProcessingContext,
    job_id: &JobId,
    url: &str,
    template_id: &str,
) -> PipelineResult<()> {
    ctx.jobs
        .set(
            job_id,
            JobStatus::processing("Extracting video metadata...", 10, "Getting video information"),
        )
        .await
        .ok();

    let video_id = extract_video_id(url)?;

    ctx.jobs
        .set(
            job_id,
            JobStatus::processing("Downloading transcript...", 25, "Fetching video transcript"),
        )
        .await
        .ok();

    let transcript = ctx.transcripts.fetch(&video_id).await?;
    info!(
        "Retrieved transcript with {} characters for job {}",
        transcript.chars().count(),
        job_id
    );

    ctx.jobs
        .set(
            job_id,
            JobStatus::processing(
                "Analyzing content and generating key points...",
                50,
                "AI-powered content analysis in progress",
            ),
        )
        .await
        .ok();

    let mut analysis = analyze_transcript(ctx.summarizer.as_ref(), &transcript).await;

    ctx.jobs
        .set(
            job_id,
            JobStatus::processing(
                "Preparing infographic content...",
                70,
                "Organizing content for visualization",
            ),
        )
        .await
        .ok();

    let schema = ctx.templates.get_schema(template_id)?;

    let query = content_query(&analysis);
    let pool = ctx
        .ranker
        .rank(&query, Some(analysis.category.as_str()), ctx.config.icon_pool_size)
        .await;
    analysis.icons = icon_suggestions(&analysis, &pool);

    ctx.jobs
        .set(
            job_id,
            JobStatus::processing(
                "Selecting icons and positioning elements...",
                85,
                "Mapping content to template coordinates",
            ),
        )
        .await
        .ok();

    let layout = map_layout(&analysis, schema, &pool);

    let record = InfographicRecord {
        id: job_id.clone(),
        video_id,
        source_url: url.to_string(),
        analysis,
        template_data: layout,
        template_type: template_id.to_string(),
        transcript_excerpt: excerpt(&transcript, ctx.config.transcript_excerpt_chars),
        created_at: Utc::now(),
    };

    ctx.infographics.set(job_id, record).await?;

    ctx.jobs
        .set(
            job_id,
            JobStatus::completed("Infographic generated successfully!", "Ready for download"),
        )
        .await
        .ok();

    info!("Completed job {}", job_id);
    Ok(())
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iforge_analysis::UnavailableSummarizer;

    #[tokio::test]
    async fn test_analyze_transcript_falls_back_to_extraction() {
        let text = "The main lesson is to keep shipping every week. \
            Adoption grew by 70% in a single quarter. \
            Remember that consistency beats intensity.";

        let analysis = analyze_transcript(&UnavailableSummarizer, text).await;

        assert_eq!(analysis.key_points.len(), 5);
        assert!(analysis.statistics.iter().any(|s| s.percentage == 70));
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let text = "x".repeat(600);
        let e = excerpt(&text, 500);
        assert_eq!(e.chars().count(), 503);
        assert!(e.ends_with("..."));

        assert_eq!(excerpt("short", 500), "short");
    }
}
