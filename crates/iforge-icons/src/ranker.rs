//! Icon ranker: query construction and result shaping over the index.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::warn;

use iforge_models::IconCandidate;

use crate::index::{IndexHit, SimilarityIndex};

/// Placeholder glyph used when a hit carries no renderable reference.
pub const PLACEHOLDER_GLYPH: &str = r#"<circle cx="12" cy="12" r="10" fill="currentColor"/>"#;

/// Fixed similarity assigned to placeholder icons.
const PLACEHOLDER_SCORE: f64 = 0.5;

/// Size of the placeholder set.
const PLACEHOLDER_COUNT: usize = 6;

/// Ranks icon candidates for a text query.
///
/// Downstream layout logic is never starved: when the index is
/// unavailable or returns no usable signal, a fixed placeholder set is
/// returned instead of an error. A category filter that matches zero
/// icons is a legitimate empty result and is returned as such.
#[derive(Clone)]
pub struct IconRanker {
    index: Arc<dyn SimilarityIndex>,
}

impl IconRanker {
    /// Create a ranker over a similarity index.
    pub fn new(index: Arc<dyn SimilarityIndex>) -> Self {
        Self { index }
    }

    /// Return up to `limit` candidates for `query`, ordered by
    /// descending similarity with icon-id tie-breaks so identical calls
    /// against an unchanged index produce identical output.
    pub async fn rank(
        &self,
        query: &str,
        category: Option<&str>,
        limit: usize,
    ) -> Vec<IconCandidate> {
        if limit == 0 {
            return Vec::new();
        }

        let hits = match self.index.query(query, category, limit).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Icon index query failed, using placeholder icons: {}", e);
                return placeholder_icons(limit);
            }
        };

        if hits.is_empty() {
            if category.is_some() {
                // The filter excluded the whole pool; an empty set is the
                // correct answer, not a fallback.
                return Vec::new();
            }
            warn!("Icon index returned no hits, using placeholder icons");
            return placeholder_icons(limit);
        }

        let mut candidates: Vec<IconCandidate> =
            hits.into_iter().map(candidate_from_hit).collect();

        candidates.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        candidates.truncate(limit);
        candidates
    }
}

fn candidate_from_hit(hit: IndexHit) -> IconCandidate {
    IconCandidate {
        description: format!("Icon for {}", hit.name),
        svg_path: hit.svg_path.unwrap_or_else(|| PLACEHOLDER_GLYPH.to_string()),
        id: hit.id,
        name: hit.name,
        category: hit.category,
        keywords: hit.keywords,
        similarity_score: hit.score,
    }
    .with_clamped_score()
}

/// The fixed placeholder set returned in degraded mode.
pub fn placeholder_icons(limit: usize) -> Vec<IconCandidate> {
    (0..limit.min(PLACEHOLDER_COUNT))
        .map(|i| IconCandidate {
            id: format!("fallback_{i}"),
            name: format!("Icon {}", i + 1),
            category: "general".to_string(),
            keywords: vec!["general".to_string(), "icon".to_string()],
            description: format!("Fallback icon {}", i + 1),
            similarity_score: PLACEHOLDER_SCORE,
            svg_path: PLACEHOLDER_GLYPH.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IndexError, IndexResult};
    use async_trait::async_trait;

    /// Index stub returning canned hits or a fixed error.
    struct StubIndex {
        result: Result<Vec<IndexHit>, ()>,
    }

    #[async_trait]
    impl SimilarityIndex for StubIndex {
        async fn query(
            &self,
            _text: &str,
            _category: Option<&str>,
            _limit: usize,
        ) -> IndexResult<Vec<IndexHit>> {
            match &self.result {
                Ok(hits) => Ok(hits.clone()),
                Err(()) => Err(IndexError::ServiceUnavailable("down".to_string())),
            }
        }
    }

    fn hit(id: &str, score: f64) -> IndexHit {
        IndexHit {
            id: id.to_string(),
            name: id.to_string(),
            category: "business".to_string(),
            keywords: vec![],
            score,
            svg_path: None,
        }
    }

    fn ranker_with(result: Result<Vec<IndexHit>, ()>) -> IconRanker {
        IconRanker::new(Arc::new(StubIndex { result }))
    }

    #[tokio::test]
    async fn test_rank_orders_by_score_with_id_tie_break() {
        let ranker = ranker_with(Ok(vec![
            hit("zebra", 0.8),
            hit("alpha", 0.8),
            hit("top", 0.95),
        ]));

        let ranked = ranker.rank("business growth", Some("business"), 5).await;
        let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "alpha", "zebra"]);
    }

    #[tokio::test]
    async fn test_rank_is_deterministic_across_calls() {
        let ranker = ranker_with(Ok(vec![
            hit("b", 0.5),
            hit("a", 0.5),
            hit("c", 0.7),
        ]));

        let first = ranker.rank("business growth", Some("business"), 5).await;
        let second = ranker.rank("business growth", Some("business"), 5).await;

        let first_ids: Vec<&str> = first.iter().map(|c| c.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn test_rank_respects_limit() {
        let ranker = ranker_with(Ok((0..10).map(|i| hit(&format!("i{i}"), 0.9)).collect()));
        assert_eq!(ranker.rank("q", None, 4).await.len(), 4);
    }

    #[tokio::test]
    async fn test_index_failure_yields_placeholders() {
        let ranker = ranker_with(Err(()));
        let ranked = ranker.rank("anything", None, 4).await;

        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|c| c.category == "general"));
        assert!(ranked.iter().all(|c| c.similarity_score == 0.5));
    }

    #[tokio::test]
    async fn test_empty_unfiltered_result_yields_placeholders() {
        let ranker = ranker_with(Ok(vec![]));
        let ranked = ranker.rank("anything", None, 10).await;

        assert!(!ranked.is_empty());
        assert!(ranked.len() <= 10);
        assert!(ranked.iter().all(|c| c.category == "general"));
    }

    #[tokio::test]
    async fn test_empty_filtered_result_stays_empty() {
        let ranker = ranker_with(Ok(vec![]));
        let ranked = ranker.rank("anything", Some("finance"), 10).await;
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_scores_clamped_and_glyph_defaulted() {
        let ranker = ranker_with(Ok(vec![hit("hot", 1.7)]));
        let ranked = ranker.rank("q", None, 5).await;
        assert_eq!(ranked[0].similarity_score, 1.0);
        assert_eq!(ranked[0].svg_path, PLACEHOLDER_GLYPH);
    }
}
