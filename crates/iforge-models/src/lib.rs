//! Shared data models for the InfoForge backend.
//!
//! This crate provides Serde-serializable types for:
//! - Templates, coordinate slots and color schemes
//! - Content analysis (normalized and draft forms)
//! - Icon candidates
//! - Positioned layouts
//! - Jobs and infographic records

pub mod content;
pub mod icon;
pub mod job;
pub mod layout;
pub mod template;

// Re-export common types
pub use content::{AnalysisDraft, Category, ContentAnalysis, DraftStatistic, Statistic};
pub use icon::IconCandidate;
pub use job::{InfographicRecord, JobId, JobState, JobStatus};
pub use layout::{Dimensions, Layout, Position, PositionedElements, PositionedStatistic, PositionedText};
pub use template::{ColorScheme, CoordinateSlot, ElementKind, IconSize, Template, TemplateSchema};
