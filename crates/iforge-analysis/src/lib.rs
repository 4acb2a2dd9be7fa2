//! Content analysis for the InfoForge pipeline.
//!
//! This crate provides:
//! - `normalize`: coerce a loosely structured analysis draft into the
//!   fixed-cardinality `ContentAnalysis` the layout mapper consumes
//! - `extract_basic`: deterministic fallback extraction over raw text
//! - The summarizer capability trait with an HTTP LLM implementation
//!   and an always-unavailable implementation

pub mod error;
pub mod extract;
pub mod normalize;
pub mod summarizer;

pub use error::{AnalysisError, AnalysisResult};
pub use extract::extract_basic;
pub use normalize::normalize;
pub use summarizer::{LlmSummarizer, Summarizer, SummarizerConfig, UnavailableSummarizer};
