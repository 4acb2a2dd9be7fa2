//! Template coordinate-schema store.
//!
//! This crate provides:
//! - Read-only lookup of per-template coordinate schemas
//! - Built-in template provisioning
//! - Template listing

pub mod defaults;
pub mod error;
pub mod store;

pub use error::{TemplateError, TemplateResult};
pub use store::TemplateStore;
