//! The layout mapping algorithm.

use tracing::debug;

use iforge_models::{
    ContentAnalysis, CoordinateSlot, Dimensions, ElementKind, IconCandidate, Layout, Position,
    PositionedElements, PositionedStatistic, PositionedText, TemplateSchema,
};

/// Matching text used for quote elements. Quotes bind to whichever pool
/// candidate has the highest standalone similarity score: the substring
/// checks against this literal rarely hit a keyword, so scoring reduces
/// to the similarity component. Known behavior, kept from the original
/// selection rules.
const QUOTE_MATCH_TEXT: &str = "quote";

/// Build the whole-content query the shared icon pool is fetched for.
pub fn content_query(content: &ContentAnalysis) -> String {
    format!("{} {}", content.main_title, content.key_points.join(" "))
}

/// Score one candidate against an element's text: +2 per keyword found
/// as a case-insensitive substring, +1 when the candidate's category
/// name appears in the text, plus the similarity score as a continuous
/// tie-break component.
fn score_candidate(text_lower: &str, candidate: &IconCandidate) -> f64 {
    let mut score = 0.0;

    for keyword in &candidate.keywords {
        if text_lower.contains(&keyword.to_lowercase()) {
            score += 2.0;
        }
    }

    if !candidate.category.is_empty() && text_lower.contains(&candidate.category.to_lowercase()) {
        score += 1.0;
    }

    score + candidate.similarity_score
}

/// Select the best icon for an element's text from the shared pool.
///
/// Ties break by pool order (first seen wins). The selected icon is not
/// removed from the pool; several elements may share one icon. Returns
/// `None` only when the pool is empty.
pub fn best_icon_for_text<'a>(
    text: &str,
    pool: &'a [IconCandidate],
) -> Option<&'a IconCandidate> {
    if pool.is_empty() {
        return None;
    }

    let text_lower = text.to_lowercase();
    let mut best: Option<&IconCandidate> = None;
    let mut best_score = 0.0;

    for candidate in pool {
        let score = score_candidate(&text_lower, candidate);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best.or_else(|| pool.first())
}

/// One icon-name suggestion per key point, from the same per-element
/// scoring the mapper uses.
pub fn icon_suggestions(content: &ContentAnalysis, pool: &[IconCandidate]) -> Vec<String> {
    content
        .key_points
        .iter()
        .filter_map(|point| best_icon_for_text(point, pool).map(|icon| icon.name.clone()))
        .collect()
}

fn position_of(slot: &CoordinateSlot) -> Position {
    Position {
        x: slot.x,
        y: slot.y,
        width: slot.width,
        height: slot.height,
    }
}

fn positioned_text(
    index: usize,
    text: &str,
    match_text: &str,
    slot: &CoordinateSlot,
    pool: &[IconCandidate],
) -> PositionedText {
    PositionedText {
        index: index as u32,
        text: text.to_string(),
        position: position_of(slot),
        icon: best_icon_for_text(match_text, pool).cloned(),
        icon_size: slot.icon_size,
    }
}

/// Map normalized content onto a template's coordinate schema.
///
/// Per element kind, the i-th content element binds to slot (kind, i);
/// elements without a slot are dropped, never resized or re-flowed, and
/// elements are never reordered. A template with zero slots for a kind
/// silently drops all elements of that kind.
pub fn map_layout(
    content: &ContentAnalysis,
    schema: &TemplateSchema,
    icon_pool: &[IconCandidate],
) -> Layout {
    let mut elements = PositionedElements::default();

    for (i, point) in content.key_points.iter().enumerate() {
        let Some(slot) = schema.slot(ElementKind::KeyPoint, i as u32) else {
            continue;
        };
        elements
            .key_points
            .push(positioned_text(i, point, point, slot, icon_pool));
    }

    for (i, stat) in content.statistics.iter().enumerate() {
        let Some(slot) = schema.slot(ElementKind::Statistic, i as u32) else {
            continue;
        };
        let stat_text = format!("{} {}", stat.label, stat.value);
        elements.statistics.push(PositionedStatistic {
            index: i as u32,
            data: stat.clone(),
            position: position_of(slot),
            icon: best_icon_for_text(&stat_text, icon_pool).cloned(),
            icon_size: slot.icon_size,
        });
    }

    for (i, quote) in content.quotes.iter().enumerate() {
        let Some(slot) = schema.slot(ElementKind::Quote, i as u32) else {
            continue;
        };
        elements
            .quotes
            .push(positioned_text(i, quote, QUOTE_MATCH_TEXT, slot, icon_pool));
    }

    if let Some(slot) = schema.slot(ElementKind::Title, 0) {
        elements.title.push(positioned_text(
            0,
            &content.main_title,
            &content.main_title,
            slot,
            icon_pool,
        ));
    }

    debug!(
        template = %schema.template.id,
        key_points = elements.key_points.len(),
        statistics = elements.statistics.len(),
        quotes = elements.quotes.len(),
        "Mapped content onto template"
    );

    Layout {
        template: schema.template.clone(),
        content: content.clone(),
        positioned_elements: elements,
        color_schemes: schema.color_schemes.clone(),
        dimensions: Dimensions {
            width: schema.template.width,
            height: schema.template.height,
        },
    }
}
