//! In-memory template store.
//!
//! Templates are provisioned at construction and read-only afterward.
//! The store is cheap to clone and safe to share across concurrent jobs.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use iforge_models::{Template, TemplateSchema};

use crate::defaults::builtin_templates;
use crate::error::{TemplateError, TemplateResult};

/// Read-only store of template coordinate schemas, keyed by template id.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    schemas: Arc<HashMap<String, TemplateSchema>>,
}

impl TemplateStore {
    /// Create a store from an explicit schema set.
    pub fn new(schemas: Vec<TemplateSchema>) -> Self {
        let schemas: HashMap<String, TemplateSchema> = schemas
            .into_iter()
            .map(|s| (s.template.id.clone(), s))
            .collect();

        info!("Provisioned {} templates", schemas.len());

        Self {
            schemas: Arc::new(schemas),
        }
    }

    /// Create a store provisioned with the built-in template set.
    pub fn with_builtin_templates() -> Self {
        Self::new(builtin_templates())
    }

    /// Look up the coordinate schema for a template.
    pub fn get_schema(&self, template_id: &str) -> TemplateResult<&TemplateSchema> {
        self.schemas
            .get(template_id)
            .ok_or_else(|| TemplateError::not_found(template_id))
    }

    /// All provisioned templates, sorted by id for stable listings.
    pub fn list(&self) -> Vec<&Template> {
        let mut templates: Vec<&Template> =
            self.schemas.values().map(|s| &s.template).collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::with_builtin_templates()
    }
}
