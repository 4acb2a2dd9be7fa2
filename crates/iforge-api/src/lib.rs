//! Axum HTTP API server.
//!
//! This crate provides:
//! - REST endpoints for generation, status polling and retrieval
//! - Template and icon-search endpoints
//! - Security headers, request ids and request logging

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
