//! Per-job processing pipeline.
//!
//! This crate provides:
//! - The job and infographic store abstractions with in-memory
//!   implementations
//! - Transcript source capability and video-id extraction
//! - The staged transcript-to-layout pipeline

pub mod config;
pub mod error;
pub mod job_store;
pub mod processor;
pub mod transcript;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult, StoreError, StoreResult};
pub use job_store::{InMemoryInfographicStore, InMemoryJobStore, InfographicStore, JobStore};
pub use processor::{generate_layout, run_job, ProcessingContext};
pub use transcript::{extract_video_id, HttpTranscriptSource, TranscriptConfig, TranscriptSource};
