//! Deterministic fallback extraction.
//!
//! Used when no summarizer is wired or its response cannot be parsed.
//! Splits the text into sentence-like units and harvests statistics,
//! salient key points and quoted sentences from them.

use regex_lite::Regex;

use iforge_models::{AnalysisDraft, DraftStatistic};

use crate::normalize::{truncate_chars, DEFAULT_TITLE, MAX_KEY_POINTS, MAX_TITLE_CHARS};

/// Sentences examined from the head of the text.
const MAX_SENTENCES: usize = 30;

/// Markers that promote a sentence to a key point.
const SALIENCE_MARKERS: &[&str] = &[
    "important", "key", "main", "first", "second", "third", "remember", "crucial",
];

/// Longest sentence still usable as a key point, in characters.
const MAX_POINT_CHARS: usize = 120;

/// Extract a best-effort analysis draft from raw transcript text.
pub fn extract_basic(text: &str) -> AnalysisDraft {
    let percent_re = Regex::new(r"(?i)(\d+)%|(\d+)\s*percent").expect("valid percent pattern");

    let sentences: Vec<&str> = text.split('.').collect();
    let word_count = text.split_whitespace().count();

    let mut key_points: Vec<String> = Vec::new();
    let mut statistics: Vec<DraftStatistic> = Vec::new();
    let mut quotes: Vec<String> = Vec::new();

    for sentence in sentences.iter().take(MAX_SENTENCES) {
        let sentence = sentence.trim();
        if sentence.chars().count() < 10 {
            continue;
        }

        if let Some(caps) = percent_re.captures(sentence) {
            if let Some(percentage) = caps
                .get(1)
                .or_else(|| caps.get(2))
                .and_then(|m| m.as_str().parse::<u64>().ok())
            {
                let percentage = percentage.min(100);
                statistics.push(DraftStatistic {
                    label: Some(ellipsize(sentence, 40)),
                    value: Some(serde_json::Value::String(format!("{percentage}%"))),
                    percentage: Some(serde_json::Value::from(percentage)),
                });
            }
        }

        let lowered = sentence.to_lowercase();
        if SALIENCE_MARKERS.iter().any(|m| lowered.contains(m))
            && sentence.chars().count() <= MAX_POINT_CHARS
        {
            key_points.push(sentence.to_string());
        }

        if sentence.contains('"') {
            quotes.push(sentence.replace('"', ""));
        }
    }

    let main_title = sentences
        .iter()
        .take(5)
        .map(|s| s.trim())
        .find(|s| s.chars().count() > 10)
        .map(|s| truncate_chars(s, MAX_TITLE_CHARS))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // No salience-marked sentences: fall back to the first few sentences
    // of usable length.
    if key_points.is_empty() {
        key_points = sentences
            .iter()
            .skip(1)
            .take(7)
            .map(|s| s.trim())
            .filter(|s| {
                let len = s.chars().count();
                len > 15 && len <= MAX_POINT_CHARS
            })
            .take(MAX_KEY_POINTS)
            .map(|s| s.to_string())
            .collect();
    }

    if statistics.is_empty() {
        statistics = default_statistics(word_count, key_points.len());
    }

    AnalysisDraft {
        main_title: Some(main_title),
        summary: Some(format!(
            "Analysis of video content covering {} main topics",
            key_points.len().max(1)
        )),
        key_points,
        statistics,
        quotes,
        category: Some("business".to_string()),
        word_count: Some(word_count),
        transcript_length: Some(text.chars().count()),
    }
}

/// Coarse content-volume statistics used when the text carries no
/// percentage figures of its own.
fn default_statistics(word_count: usize, key_point_count: usize) -> Vec<DraftStatistic> {
    vec![
        DraftStatistic {
            label: Some("Video Content Analysis".to_string()),
            value: Some(serde_json::Value::String(format!("{word_count} words"))),
            percentage: Some(serde_json::Value::from((word_count / 20).min(100))),
        },
        DraftStatistic {
            label: Some("Key Points Identified".to_string()),
            value: Some(serde_json::Value::String(key_point_count.to_string())),
            percentage: Some(serde_json::Value::from((key_point_count * 15).min(100))),
        },
    ]
}

fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", truncate_chars(s, max))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    const SAMPLE: &str = "Building a sustainable business takes patience and focus. \
        The most important thing is to listen to your customers every single day. \
        Our retention improved by 85% after we changed onboarding. \
        Remember that growth compounds when the fundamentals are right. \
        As one founder put it, \"distribution beats product more often than not\". \
        The second key habit is reviewing metrics weekly.";

    #[test]
    fn test_extracts_statistics_from_percent_pattern() {
        let draft = extract_basic(SAMPLE);
        let stat = &draft.statistics[0];
        assert_eq!(
            stat.value.as_ref().unwrap().as_str().unwrap(),
            "85%"
        );
        assert_eq!(stat.percentage.as_ref().unwrap().as_u64().unwrap(), 85);
    }

    #[test]
    fn test_extracts_salience_marked_key_points() {
        let draft = extract_basic(SAMPLE);
        assert!(draft
            .key_points
            .iter()
            .any(|p| p.contains("most important thing")));
        assert!(draft.key_points.iter().any(|p| p.contains("Remember")));
    }

    #[test]
    fn test_extracts_quoted_sentences_with_quotes_stripped() {
        let draft = extract_basic(SAMPLE);
        assert_eq!(draft.quotes.len(), 1);
        assert!(draft.quotes[0].contains("distribution beats product"));
        assert!(!draft.quotes[0].contains('"'));
    }

    #[test]
    fn test_title_is_first_long_sentence_capped() {
        let draft = extract_basic(SAMPLE);
        let title = draft.main_title.unwrap();
        assert!(title.starts_with("Building a sustainable business"));
        assert!(title.chars().count() <= 80);
    }

    #[test]
    fn test_unmarked_text_uses_leading_sentences() {
        let text = "An opening line that is long enough to be a title. \
            Here is a following sentence of reasonable length. \
            Another sentence that could be a talking point. \
            And one more with enough words to qualify here.";

        let draft = extract_basic(text);
        assert!(!draft.key_points.is_empty());
        assert!(draft.key_points[0].contains("following sentence"));
    }

    #[test]
    fn test_empty_text_still_normalizes_to_invariants() {
        let analysis = normalize(extract_basic(""));
        assert_eq!(analysis.key_points.len(), 5);
        assert!(analysis.statistics.len() <= 4);
        assert_eq!(analysis.main_title, "Video Content Summary");
    }

    #[test]
    fn test_word_and_character_counts_recorded() {
        let draft = extract_basic("Count these five words exactly.");
        assert_eq!(draft.word_count, Some(5));
        assert_eq!(draft.transcript_length, Some(31));
    }
}
