//! Content analysis models: the loosely structured draft produced by a
//! summarizer or extractor, and the normalized form the pipeline consumes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Content category vocabulary for templates and icon filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Business,
    Education,
    Technology,
    Health,
    Finance,
    Lifestyle,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Business,
        Category::Education,
        Category::Technology,
        Category::Health,
        Category::Finance,
        Category::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Education => "education",
            Category::Technology => "technology",
            Category::Health => "health",
            Category::Finance => "finance",
            Category::Lifestyle => "lifestyle",
        }
    }

    /// Parse a category, normalizing unrecognized values to `Business`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "business" => Ok(Category::Business),
            "education" => Ok(Category::Education),
            "technology" => Ok(Category::Technology),
            "health" => Ok(Category::Health),
            "finance" => Ok(Category::Finance),
            "lifestyle" => Ok(Category::Lifestyle),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown category: {0}")]
pub struct CategoryParseError(String);

/// A normalized statistic: label, display value and a percentage in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Statistic {
    pub label: String,
    pub value: String,
    pub percentage: u8,
}

impl Statistic {
    pub fn new(label: impl Into<String>, value: impl Into<String>, percentage: u8) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            percentage: percentage.min(100),
        }
    }
}

/// A statistic as it appears in an unnormalized draft. Fields may be
/// missing or carry the wrong JSON type; normalization coerces them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftStatistic {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub value: Option<serde_json::Value>,

    #[serde(default)]
    pub percentage: Option<serde_json::Value>,
}

/// Loosely structured analysis result, as produced by a summarizer call
/// or the deterministic extractor. Defensively parsed: every field is
/// optional and external camelCase keys are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisDraft {
    #[serde(default, alias = "mainTitle")]
    pub main_title: Option<String>,

    #[serde(default, alias = "keyPoints")]
    pub key_points: Vec<String>,

    #[serde(default)]
    pub statistics: Vec<DraftStatistic>,

    #[serde(default)]
    pub quotes: Vec<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default, alias = "wordCount")]
    pub word_count: Option<usize>,

    #[serde(default, alias = "transcriptLength")]
    pub transcript_length: Option<usize>,
}

/// The normalized extraction result. Created once per job; immutable
/// afterward. Cardinalities are guaranteed by the normalizer: 5-6 key
/// points, at most 4 statistics, at most 2 quotes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    /// Main title, non-empty, at most 80 characters
    pub main_title: String,

    /// Key takeaway points, in source order
    pub key_points: Vec<String>,

    /// Extracted statistics
    pub statistics: Vec<Statistic>,

    /// Memorable quotes
    pub quotes: Vec<String>,

    /// Content category
    pub category: Category,

    /// Short summary of the source
    pub summary: String,

    /// Word count of the source text
    pub word_count: usize,

    /// Character count of the source text
    pub transcript_length: usize,

    /// One icon suggestion per key point, derived from ranked candidates
    /// by the orchestrator; empty until the icon pool has been fetched.
    #[serde(default)]
    pub icons: Vec<String>,
}

impl From<&ContentAnalysis> for AnalysisDraft {
    fn from(analysis: &ContentAnalysis) -> Self {
        AnalysisDraft {
            main_title: Some(analysis.main_title.clone()),
            key_points: analysis.key_points.clone(),
            statistics: analysis
                .statistics
                .iter()
                .map(|s| DraftStatistic {
                    label: Some(s.label.clone()),
                    value: Some(serde_json::Value::String(s.value.clone())),
                    percentage: Some(serde_json::Value::from(s.percentage)),
                })
                .collect(),
            quotes: analysis.quotes.clone(),
            category: Some(analysis.category.to_string()),
            summary: Some(analysis.summary.clone()),
            word_count: Some(analysis.word_count),
            transcript_length: Some(analysis.transcript_length),
        }
    }
}
