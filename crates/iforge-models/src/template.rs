//! Template, coordinate slot and color scheme definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::content::Category;

/// Kind of content element a coordinate slot is reserved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    KeyPoint,
    Statistic,
    Quote,
    Title,
}

impl ElementKind {
    /// All element kinds, in the order layouts report them.
    pub const ALL: &'static [ElementKind] = &[
        ElementKind::KeyPoint,
        ElementKind::Statistic,
        ElementKind::Quote,
        ElementKind::Title,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::KeyPoint => "key_point",
            ElementKind::Statistic => "statistic",
            ElementKind::Quote => "quote",
            ElementKind::Title => "title",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ElementKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "key_point" => Ok(ElementKind::KeyPoint),
            "statistic" => Ok(ElementKind::Statistic),
            "quote" => Ok(ElementKind::Quote),
            "title" => Ok(ElementKind::Title),
            _ => Err(ElementKindParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown element kind: {0}")]
pub struct ElementKindParseError(String);

/// Preferred icon size tier for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl IconSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconSize::Small => "small",
            IconSize::Medium => "medium",
            IconSize::Large => "large",
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IconSize {
    type Err = IconSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(IconSize::Small),
            "medium" => Ok(IconSize::Medium),
            "large" => Ok(IconSize::Large),
            _ => Err(IconSizeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown icon size: {0}")]
pub struct IconSizeParseError(String);

/// An infographic template. Immutable after provisioning.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Template {
    /// Template ID (e.g. "modern-business")
    pub id: String,

    /// Display name
    pub name: String,

    /// Category tag
    pub category: Category,

    /// Short description
    pub description: String,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,
}

/// A named slot within a template, keyed by (kind, index).
///
/// Slots of a kind are consulted in ascending index order; slot index i
/// receives the i-th content element of that kind.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CoordinateSlot {
    /// Element kind this slot accepts
    pub kind: ElementKind,

    /// Zero-based position among slots of this kind
    pub index: u32,

    /// X position in pixels
    pub x: u32,

    /// Y position in pixels
    pub y: u32,

    /// Slot width in pixels
    pub width: u32,

    /// Slot height in pixels
    pub height: u32,

    /// Preferred icon size tier
    #[serde(default)]
    pub icon_size: IconSize,
}

impl CoordinateSlot {
    pub fn new(kind: ElementKind, index: u32, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            kind,
            index,
            x,
            y,
            width,
            height,
            icon_size: IconSize::default(),
        }
    }

    pub fn with_icon_size(mut self, icon_size: IconSize) -> Self {
        self.icon_size = icon_size;
        self
    }
}

/// A color scheme attached to a template. Five required colors plus a
/// default flag; at most one scheme per template is marked default.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ColorScheme {
    pub scheme_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Full coordinate schema for one template: the template record, its
/// slots and its color schemes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TemplateSchema {
    pub template: Template,
    pub slots: Vec<CoordinateSlot>,
    pub color_schemes: Vec<ColorScheme>,
}

impl TemplateSchema {
    /// Slots of a given kind, in ascending index order.
    pub fn slots_for(&self, kind: ElementKind) -> Vec<&CoordinateSlot> {
        let mut slots: Vec<&CoordinateSlot> =
            self.slots.iter().filter(|s| s.kind == kind).collect();
        slots.sort_by_key(|s| s.index);
        slots
    }

    /// Look up the slot at (kind, index), if the template declares one.
    pub fn slot(&self, kind: ElementKind, index: u32) -> Option<&CoordinateSlot> {
        self.slots.iter().find(|s| s.kind == kind && s.index == index)
    }

    /// The default color scheme, falling back to the first declared one.
    pub fn default_color_scheme(&self) -> Option<&ColorScheme> {
        self.color_schemes
            .iter()
            .find(|c| c.is_default)
            .or_else(|| self.color_schemes.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_with_slots(slots: Vec<CoordinateSlot>) -> TemplateSchema {
        TemplateSchema {
            template: Template {
                id: "t".to_string(),
                name: "T".to_string(),
                category: Category::Business,
                description: String::new(),
                width: 1200,
                height: 1800,
            },
            slots,
            color_schemes: vec![],
        }
    }

    #[test]
    fn test_element_kind_parse() {
        assert_eq!("key_point".parse::<ElementKind>().unwrap(), ElementKind::KeyPoint);
        assert_eq!("quote".parse::<ElementKind>().unwrap(), ElementKind::Quote);
        assert!("paragraph".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_icon_size_default() {
        assert_eq!(IconSize::default(), IconSize::Medium);
        assert_eq!("large".parse::<IconSize>().unwrap(), IconSize::Large);
    }

    #[test]
    fn test_slots_for_sorted_by_index() {
        let schema = schema_with_slots(vec![
            CoordinateSlot::new(ElementKind::KeyPoint, 2, 0, 0, 32, 32),
            CoordinateSlot::new(ElementKind::KeyPoint, 0, 0, 0, 32, 32),
            CoordinateSlot::new(ElementKind::Statistic, 0, 0, 0, 40, 40),
            CoordinateSlot::new(ElementKind::KeyPoint, 1, 0, 0, 32, 32),
        ]);

        let kp: Vec<u32> = schema
            .slots_for(ElementKind::KeyPoint)
            .iter()
            .map(|s| s.index)
            .collect();
        assert_eq!(kp, vec![0, 1, 2]);
        assert_eq!(schema.slots_for(ElementKind::Quote).len(), 0);
    }

    #[test]
    fn test_slot_lookup() {
        let schema = schema_with_slots(vec![CoordinateSlot::new(
            ElementKind::Statistic,
            1,
            600,
            1100,
            40,
            40,
        )]);

        assert!(schema.slot(ElementKind::Statistic, 1).is_some());
        assert!(schema.slot(ElementKind::Statistic, 0).is_none());
        assert!(schema.slot(ElementKind::KeyPoint, 1).is_none());
    }

    #[test]
    fn test_default_color_scheme_falls_back_to_first() {
        let mut schema = schema_with_slots(vec![]);
        schema.color_schemes = vec![
            ColorScheme {
                scheme_name: "A".to_string(),
                primary_color: "#111111".to_string(),
                secondary_color: "#222222".to_string(),
                accent_color: "#333333".to_string(),
                background_color: "#FFFFFF".to_string(),
                text_color: "#000000".to_string(),
                is_default: false,
            },
            ColorScheme {
                scheme_name: "B".to_string(),
                primary_color: "#444444".to_string(),
                secondary_color: "#555555".to_string(),
                accent_color: "#666666".to_string(),
                background_color: "#FFFFFF".to_string(),
                text_color: "#000000".to_string(),
                is_default: true,
            },
        ];

        assert_eq!(schema.default_color_scheme().unwrap().scheme_name, "B");

        schema.color_schemes[1].is_default = false;
        assert_eq!(schema.default_color_scheme().unwrap().scheme_name, "A");
    }
}
