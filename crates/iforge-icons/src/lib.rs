//! Icon relevance ranking.
//!
//! This crate provides:
//! - The similarity-index capability trait and its HTTP client
//! - The icon ranker: query construction, result shaping, deterministic
//!   ordering and the placeholder fallback

pub mod error;
pub mod index;
pub mod ranker;

pub use error::{IndexError, IndexResult};
pub use index::{IconIndexClient, IndexConfig, IndexHit, SimilarityIndex};
pub use ranker::IconRanker;
