//! Deterministic content-to-coordinate layout mapping.
//!
//! The mapper is a pure function of its inputs: a normalized content
//! analysis, a template's coordinate schema and a ranked icon pool. It
//! performs no I/O, which keeps it independently testable and safe to
//! invoke concurrently for distinct jobs.

pub mod mapper;

pub use mapper::{best_icon_for_text, content_query, icon_suggestions, map_layout};
