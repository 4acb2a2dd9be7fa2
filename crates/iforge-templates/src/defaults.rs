//! Built-in templates provisioned at store construction.

use iforge_models::{
    Category, ColorScheme, CoordinateSlot, ElementKind, IconSize, Template, TemplateSchema,
};

fn scheme(
    name: &str,
    primary: &str,
    secondary: &str,
    accent: &str,
    background: &str,
    text: &str,
) -> ColorScheme {
    ColorScheme {
        scheme_name: name.to_string(),
        primary_color: primary.to_string(),
        secondary_color: secondary.to_string(),
        accent_color: accent.to_string(),
        background_color: background.to_string(),
        text_color: text.to_string(),
        is_default: true,
    }
}

/// The built-in template set.
pub fn builtin_templates() -> Vec<TemplateSchema> {
    vec![
        modern_business(),
        educational_flow(),
        tech_pulse(),
        wellness_track(),
    ]
}

fn modern_business() -> TemplateSchema {
    let mut slots = Vec::new();
    for i in 0..5 {
        slots.push(CoordinateSlot::new(
            ElementKind::KeyPoint,
            i,
            100,
            400 + i * 120,
            32,
            32,
        ));
    }
    slots.push(
        CoordinateSlot::new(ElementKind::Statistic, 0, 200, 1100, 40, 40)
            .with_icon_size(IconSize::Large),
    );
    slots.push(
        CoordinateSlot::new(ElementKind::Statistic, 1, 600, 1100, 40, 40)
            .with_icon_size(IconSize::Large),
    );

    TemplateSchema {
        template: Template {
            id: "modern-business".to_string(),
            name: "Modern Business".to_string(),
            category: Category::Business,
            description: "Clean corporate design with professional layout".to_string(),
            width: 1200,
            height: 1800,
        },
        slots,
        color_schemes: vec![scheme(
            "Corporate Blue",
            "#2563EB",
            "#1E40AF",
            "#3B82F6",
            "#FFFFFF",
            "#1F2937",
        )],
    }
}

fn educational_flow() -> TemplateSchema {
    let mut slots = Vec::new();
    for i in 0..6 {
        slots.push(
            CoordinateSlot::new(ElementKind::KeyPoint, i, 80, 350 + i * 100, 28, 28)
                .with_icon_size(IconSize::Small),
        );
    }

    TemplateSchema {
        template: Template {
            id: "educational-flow".to_string(),
            name: "Educational Flow".to_string(),
            category: Category::Education,
            description: "Perfect for learning content with step-by-step layout".to_string(),
            width: 1200,
            height: 1800,
        },
        slots,
        color_schemes: vec![scheme(
            "Academic Blue",
            "#1D4ED8",
            "#1E40AF",
            "#3B82F6",
            "#F8FAFC",
            "#0F172A",
        )],
    }
}

fn tech_pulse() -> TemplateSchema {
    let mut slots = Vec::new();
    for i in 0..5 {
        slots.push(CoordinateSlot::new(
            ElementKind::KeyPoint,
            i,
            120,
            420 + i * 110,
            32,
            32,
        ));
    }
    for i in 0..3 {
        slots.push(
            CoordinateSlot::new(ElementKind::Statistic, i, 150 + i * 340, 1150, 48, 48)
                .with_icon_size(IconSize::Large),
        );
    }
    slots.push(CoordinateSlot::new(ElementKind::Quote, 0, 140, 1500, 36, 36));

    TemplateSchema {
        template: Template {
            id: "tech-pulse".to_string(),
            name: "Tech Pulse".to_string(),
            category: Category::Technology,
            description: "Data-forward layout with a stats band and a pull quote".to_string(),
            width: 1200,
            height: 1800,
        },
        slots,
        color_schemes: vec![scheme(
            "Circuit Dark",
            "#7C3AED",
            "#5B21B6",
            "#A78BFA",
            "#0F172A",
            "#E2E8F0",
        )],
    }
}

fn wellness_track() -> TemplateSchema {
    let mut slots = Vec::new();
    for i in 0..5 {
        slots.push(CoordinateSlot::new(
            ElementKind::KeyPoint,
            i,
            90,
            380 + i * 130,
            30,
            30,
        ));
    }
    slots.push(
        CoordinateSlot::new(ElementKind::Statistic, 0, 250, 1200, 44, 44)
            .with_icon_size(IconSize::Large),
    );
    slots.push(
        CoordinateSlot::new(ElementKind::Statistic, 1, 650, 1200, 44, 44)
            .with_icon_size(IconSize::Large),
    );
    slots.push(CoordinateSlot::new(ElementKind::Quote, 0, 120, 1450, 32, 32));
    slots.push(CoordinateSlot::new(ElementKind::Quote, 1, 120, 1620, 32, 32));

    TemplateSchema {
        template: Template {
            id: "wellness-track".to_string(),
            name: "Wellness Track".to_string(),
            category: Category::Health,
            description: "Calm layout for health and habit content".to_string(),
            width: 1200,
            height: 1800,
        },
        slots,
        color_schemes: vec![scheme(
            "Fresh Mint",
            "#059669",
            "#047857",
            "#34D399",
            "#F0FDF4",
            "#064E3B",
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_have_unique_ids() {
        let templates = builtin_templates();
        let mut ids: Vec<&str> = templates.iter().map(|t| t.template.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn test_builtin_slot_indices_dense_per_kind() {
        for schema in builtin_templates() {
            for kind in iforge_models::ElementKind::ALL {
                let slots = schema.slots_for(*kind);
                for (expected, slot) in slots.iter().enumerate() {
                    assert_eq!(
                        slot.index as usize, expected,
                        "template {} has a gap in {} slot indices",
                        schema.template.id, kind
                    );
                }
            }
        }
    }

    #[test]
    fn test_builtin_templates_have_default_scheme() {
        for schema in builtin_templates() {
            assert!(
                schema.default_color_scheme().is_some(),
                "template {} has no color scheme",
                schema.template.id
            );
            let defaults = schema.color_schemes.iter().filter(|c| c.is_default).count();
            assert!(defaults <= 1);
        }
    }

    #[test]
    fn test_modern_business_matches_provisioned_shape() {
        let schema = modern_business();
        assert_eq!(schema.slots_for(ElementKind::KeyPoint).len(), 5);
        assert_eq!(schema.slots_for(ElementKind::Statistic).len(), 2);
        assert_eq!(schema.slots_for(ElementKind::Title).len(), 0);
        assert_eq!(schema.template.width, 1200);
        assert_eq!(schema.template.height, 1800);
    }
}
