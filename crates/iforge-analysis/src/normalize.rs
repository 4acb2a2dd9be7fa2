//! Draft normalization.
//!
//! `normalize` is a pure function: whatever shape the draft arrived in,
//! the result satisfies the pipeline's cardinality invariants. It never
//! fails; unusable draft entries are coerced or dropped.

use iforge_models::{AnalysisDraft, Category, ContentAnalysis, DraftStatistic, Statistic};

/// Lower bound on key points; shorter lists are padded with filler.
pub const MIN_KEY_POINTS: usize = 5;

/// Upper bound on key points; longer lists are truncated.
pub const MAX_KEY_POINTS: usize = 6;

/// Upper bound on statistics.
pub const MAX_STATISTICS: usize = 4;

/// Upper bound on quotes.
pub const MAX_QUOTES: usize = 2;

/// Upper bound on title length, in characters.
pub const MAX_TITLE_CHARS: usize = 80;

/// Filler appended when a draft carries fewer than `MIN_KEY_POINTS`.
pub const FILLER_KEY_POINT: &str = "Additional insight from the video content";

/// Title used when the draft has none.
pub const DEFAULT_TITLE: &str = "Video Content Summary";

/// Normalize a draft into a `ContentAnalysis` satisfying the fixed
/// cardinality and formatting invariants.
pub fn normalize(draft: AnalysisDraft) -> ContentAnalysis {
    let main_title = draft
        .main_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| truncate_chars(t, MAX_TITLE_CHARS))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut key_points: Vec<String> = draft
        .key_points
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    key_points.truncate(MAX_KEY_POINTS);
    while key_points.len() < MIN_KEY_POINTS {
        key_points.push(FILLER_KEY_POINT.to_string());
    }

    let statistics: Vec<Statistic> = draft
        .statistics
        .iter()
        .filter_map(coerce_statistic)
        .take(MAX_STATISTICS)
        .collect();

    let mut quotes: Vec<String> = draft
        .quotes
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect();
    quotes.truncate(MAX_QUOTES);

    let category = draft
        .category
        .as_deref()
        .map(Category::parse_lenient)
        .unwrap_or_default();

    let summary = draft
        .summary
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "Analysis of video content covering {} main topics",
                key_points.len()
            )
        });

    ContentAnalysis {
        main_title,
        key_points,
        statistics,
        quotes,
        category,
        summary,
        word_count: draft.word_count.unwrap_or(0),
        transcript_length: draft.transcript_length.unwrap_or(0),
        icons: Vec::new(),
    }
}

/// Coerce one draft statistic. Entries without a usable label and value
/// are dropped; the percentage is derived from a numeric match in the
/// fields, never invented.
fn coerce_statistic(stat: &DraftStatistic) -> Option<Statistic> {
    let label = stat.label.as_deref().map(str::trim).filter(|l| !l.is_empty())?;

    let value = match &stat.value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => return None,
    };

    let percentage = stat
        .percentage
        .as_ref()
        .and_then(numeric_from_value)
        .or_else(|| leading_number(&value))
        .unwrap_or(0.0);

    Some(Statistic::new(label, value, clamp_percentage(percentage)))
}

fn numeric_from_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => leading_number(s),
        _ => None,
    }
}

/// First integer embedded in a string ("85%" -> 85, "about 60 percent" -> 60).
fn leading_number(s: &str) -> Option<f64> {
    let mut digits = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }
    digits.parse().ok()
}

fn clamp_percentage(p: f64) -> u8 {
    p.clamp(0.0, 100.0).round() as u8
}

/// Truncate to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iforge_models::AnalysisDraft;

    fn draft_with_key_points(points: &[&str]) -> AnalysisDraft {
        AnalysisDraft {
            key_points: points.iter().map(|p| p.to_string()).collect(),
            ..AnalysisDraft::default()
        }
    }

    #[test]
    fn test_short_key_points_padded_to_five() {
        let analysis = normalize(draft_with_key_points(&["One", "Two"]));
        assert_eq!(analysis.key_points.len(), 5);
        assert_eq!(analysis.key_points[0], "One");
        assert_eq!(analysis.key_points[2], FILLER_KEY_POINT);
    }

    #[test]
    fn test_long_key_points_truncated_to_six_in_order() {
        let analysis = normalize(draft_with_key_points(&["A", "B", "C", "D", "E", "F", "G", "H"]));
        assert_eq!(analysis.key_points, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_statistics_capped_at_four() {
        let mut draft = AnalysisDraft::default();
        for i in 0..6 {
            draft.statistics.push(iforge_models::DraftStatistic {
                label: Some(format!("Metric {i}")),
                value: Some(serde_json::Value::String(format!("{i}0%"))),
                percentage: Some(serde_json::Value::from(i * 10)),
            });
        }

        let analysis = normalize(draft);
        assert_eq!(analysis.statistics.len(), 4);
        assert_eq!(analysis.statistics[0].label, "Metric 0");
    }

    #[test]
    fn test_statistic_percentage_clamped_and_coerced() {
        let mut draft = AnalysisDraft::default();
        draft.statistics.push(iforge_models::DraftStatistic {
            label: Some("Overflow".to_string()),
            value: Some(serde_json::Value::String("250%".to_string())),
            percentage: Some(serde_json::Value::from(250)),
        });
        draft.statistics.push(iforge_models::DraftStatistic {
            label: Some("Stringy".to_string()),
            value: Some(serde_json::Value::String("60 percent adoption".to_string())),
            percentage: Some(serde_json::Value::String("60".to_string())),
        });
        draft.statistics.push(iforge_models::DraftStatistic {
            label: Some("Derived from value".to_string()),
            value: Some(serde_json::Value::String("45%".to_string())),
            percentage: None,
        });
        draft.statistics.push(iforge_models::DraftStatistic {
            label: None,
            value: Some(serde_json::Value::String("dropped".to_string())),
            percentage: None,
        });

        let analysis = normalize(draft);
        assert_eq!(analysis.statistics.len(), 3);
        assert_eq!(analysis.statistics[0].percentage, 100);
        assert_eq!(analysis.statistics[1].percentage, 60);
        assert_eq!(analysis.statistics[2].percentage, 45);
    }

    #[test]
    fn test_quotes_capped_at_two() {
        let draft = AnalysisDraft {
            quotes: vec!["q1".to_string(), "q2".to_string(), "q3".to_string()],
            ..AnalysisDraft::default()
        };
        assert_eq!(normalize(draft).quotes, vec!["q1", "q2"]);
    }

    #[test]
    fn test_unknown_category_defaults_to_business() {
        let draft = AnalysisDraft {
            category: Some("astrology".to_string()),
            ..AnalysisDraft::default()
        };
        assert_eq!(normalize(draft).category, Category::Business);

        let draft = AnalysisDraft {
            category: Some("health".to_string()),
            ..AnalysisDraft::default()
        };
        assert_eq!(normalize(draft).category, Category::Health);
    }

    #[test]
    fn test_title_defaults_and_truncates() {
        let analysis = normalize(AnalysisDraft::default());
        assert_eq!(analysis.main_title, DEFAULT_TITLE);

        let long_title = "x".repeat(200);
        let draft = AnalysisDraft {
            main_title: Some(long_title),
            ..AnalysisDraft::default()
        };
        assert_eq!(normalize(draft).main_title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_renormalization_preserves_cardinalities() {
        let draft = AnalysisDraft {
            main_title: Some("Title".to_string()),
            key_points: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            quotes: vec!["q".to_string()],
            category: Some("education".to_string()),
            ..AnalysisDraft::default()
        };

        let first = normalize(draft);
        let second = normalize(AnalysisDraft::from(&first));

        assert_eq!(first.key_points.len(), second.key_points.len());
        assert_eq!(first.statistics.len(), second.statistics.len());
        assert_eq!(first.quotes.len(), second.quotes.len());
        assert_eq!(first.category, second.category);
        assert_eq!(first.main_title, second.main_title);
    }
}
