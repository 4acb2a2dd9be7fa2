//! Positioned layout models: the pipeline's terminal output, consumed by
//! rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content::{ContentAnalysis, Statistic};
use crate::icon::IconCandidate;
use crate::template::{ColorScheme, IconSize, Template};

/// Pixel geometry copied from a coordinate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Canvas dimensions of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A text element (key point, quote or title) bound to slot geometry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PositionedText {
    /// Original content index of this element
    pub index: u32,

    /// Element text, unmodified
    pub text: String,

    /// Slot geometry
    pub position: Position,

    /// Selected icon; absent when the candidate pool was empty
    pub icon: Option<IconCandidate>,

    /// Icon size tier from the slot
    pub icon_size: IconSize,
}

/// A statistic bound to slot geometry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PositionedStatistic {
    /// Original content index of this element
    pub index: u32,

    /// Statistic record, unmodified
    pub data: Statistic,

    /// Slot geometry
    pub position: Position,

    /// Selected icon; absent when the candidate pool was empty
    pub icon: Option<IconCandidate>,

    /// Icon size tier from the slot
    pub icon_size: IconSize,
}

/// Positioned element sequences, one per element kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PositionedElements {
    pub key_points: Vec<PositionedText>,
    pub statistics: Vec<PositionedStatistic>,
    pub quotes: Vec<PositionedText>,
    pub title: Vec<PositionedText>,
}

/// A fully positioned infographic layout.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Layout {
    /// The template this layout was mapped onto
    pub template: Template,

    /// The content analysis the layout was built from
    pub content: ContentAnalysis,

    /// Every content element bound to slot geometry and an icon
    pub positioned_elements: PositionedElements,

    /// Color schemes copied verbatim from the template
    pub color_schemes: Vec<ColorScheme>,

    /// Canvas dimensions copied from the template
    pub dimensions: Dimensions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    #[test]
    fn test_layout_serialization_shape() {
        let layout = Layout {
            template: Template {
                id: "modern-business".to_string(),
                name: "Modern Business".to_string(),
                category: Category::Business,
                description: String::new(),
                width: 1200,
                height: 1800,
            },
            content: ContentAnalysis {
                main_title: "T".to_string(),
                key_points: vec![],
                statistics: vec![],
                quotes: vec![],
                category: Category::Business,
                summary: String::new(),
                word_count: 0,
                transcript_length: 0,
                icons: vec![],
            },
            positioned_elements: PositionedElements::default(),
            color_schemes: vec![],
            dimensions: Dimensions {
                width: 1200,
                height: 1800,
            },
        };

        let json = serde_json::to_value(&layout).unwrap();
        assert!(json.get("positioned_elements").is_some());
        assert!(json["positioned_elements"].get("key_points").is_some());
        assert!(json["positioned_elements"].get("quotes").is_some());
        assert_eq!(json["dimensions"]["width"], 1200);
    }
}
