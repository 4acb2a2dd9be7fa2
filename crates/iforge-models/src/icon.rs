//! Icon candidate model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A ranked icon candidate returned by the icon ranker.
///
/// Produced fresh per query; layouts keep only the selected candidate's
/// reference, never the full ranked list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IconCandidate {
    /// Icon ID in the index
    pub id: String,

    /// Display name
    pub name: String,

    /// Icon category (index vocabulary, e.g. "business" or "general")
    pub category: String,

    /// Keywords the icon was indexed under
    pub keywords: Vec<String>,

    /// Human-readable description
    pub description: String,

    /// Similarity to the query, in [0, 1]
    pub similarity_score: f64,

    /// Renderable glyph reference (inline SVG fragment)
    pub svg_path: String,
}

impl IconCandidate {
    /// Clamp the similarity score into [0, 1].
    pub fn with_clamped_score(mut self) -> Self {
        self.similarity_score = self.similarity_score.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamped() {
        let icon = IconCandidate {
            id: "i".to_string(),
            name: "Icon".to_string(),
            category: "general".to_string(),
            keywords: vec![],
            description: String::new(),
            similarity_score: 1.4,
            svg_path: String::new(),
        }
        .with_clamped_score();
        assert_eq!(icon.similarity_score, 1.0);

        let icon = IconCandidate {
            similarity_score: -0.2,
            ..icon
        }
        .with_clamped_score();
        assert_eq!(icon.similarity_score, 0.0);
    }
}
