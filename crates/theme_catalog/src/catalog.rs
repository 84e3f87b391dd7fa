//! The theme catalog
//!
//! The catalog is built once and never mutated. Lookups are total: an absent,
//! empty, or unrecognized key resolves to the `other` theme, which every
//! catalog is guaranteed to contain.

use crate::motif::Motif;
use crate::participants::{
    baby_shower_title, baby_subtitle, birthday_title, celebrant_subtitle, corporate_title,
    couple_subtitle, engagement_title, host_subtitle, no_subtitle, no_title, wedding_title,
};
use crate::theme::{ThemeDefinition, ThemeKey};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Process-wide catalog of the built-in themes
static GLOBAL_CATALOG: OnceLock<ThemeCatalog> = OnceLock::new();

// =============================================================================
// Built-in Themes
// =============================================================================

/// The themes shipped with the application, in catalog order
pub fn builtin_themes() -> Vec<ThemeDefinition> {
    vec![
        ThemeDefinition {
            key: ThemeKey::Wedding,
            display_name: "Wedding".to_string(),
            primary_color: "#B76E79".to_string(),   // Rose gold
            secondary_color: "#F8E1E7".to_string(), // Blush
            accent_color: "#D4AF37".to_string(),    // Gold
            background_color: "#FFFDF8".to_string(),
            text_color: "#4A3B3F".to_string(),
            motifs: vec![Motif::Heart, Motif::Rings, Motif::Flower, Motif::Dove],
            title_strategy: wedding_title,
            subtitle_strategy: couple_subtitle,
        },
        ThemeDefinition {
            key: ThemeKey::Engagement,
            display_name: "Engagement".to_string(),
            primary_color: "#C2185B".to_string(),
            secondary_color: "#F8BBD0".to_string(),
            accent_color: "#FFD54F".to_string(),
            background_color: "#FFF8FB".to_string(),
            text_color: "#3E2723".to_string(),
            motifs: vec![Motif::Diamond, Motif::Heart, Motif::Sparkle],
            title_strategy: engagement_title,
            subtitle_strategy: couple_subtitle,
        },
        ThemeDefinition {
            key: ThemeKey::Birthday,
            display_name: "Birthday".to_string(),
            primary_color: "#F59E0B".to_string(),   // Amber
            secondary_color: "#EC4899".to_string(), // Pink
            accent_color: "#8B5CF6".to_string(),    // Violet
            background_color: "#FFFBEB".to_string(),
            text_color: "#1F2937".to_string(),
            motifs: vec![Motif::Balloon, Motif::Cake, Motif::Confetti, Motif::Gift],
            title_strategy: birthday_title,
            subtitle_strategy: celebrant_subtitle,
        },
        ThemeDefinition {
            key: ThemeKey::BabyShower,
            display_name: "Baby Shower".to_string(),
            primary_color: "#93C5FD".to_string(),   // Powder blue
            secondary_color: "#FBCFE8".to_string(), // Soft pink
            accent_color: "#FDE68A".to_string(),
            background_color: "#F0F9FF".to_string(),
            text_color: "#334155".to_string(),
            motifs: vec![Motif::Rattle, Motif::Star, Motif::Cloud],
            title_strategy: baby_shower_title,
            subtitle_strategy: baby_subtitle,
        },
        ThemeDefinition {
            key: ThemeKey::Corporate,
            display_name: "Corporate Event".to_string(),
            primary_color: "#1E3A8A".to_string(),   // Navy
            secondary_color: "#64748B".to_string(), // Slate
            accent_color: "#0EA5E9".to_string(),
            background_color: "#FFFFFF".to_string(),
            text_color: "#0F172A".to_string(),
            motifs: vec![Motif::Briefcase, Motif::Star],
            title_strategy: corporate_title,
            subtitle_strategy: host_subtitle,
        },
        other_theme(),
    ]
}

/// The fallback theme every catalog carries
fn other_theme() -> ThemeDefinition {
    ThemeDefinition {
        key: ThemeKey::Other,
        display_name: "Other".to_string(),
        primary_color: "#3B82F6".to_string(),
        secondary_color: "#8B5CF6".to_string(),
        accent_color: "#10B981".to_string(),
        background_color: "#FFFFFF".to_string(),
        text_color: "#1F2937".to_string(),
        motifs: vec![Motif::Camera, Motif::Sparkle],
        title_strategy: no_title,
        subtitle_strategy: no_subtitle,
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only registry of theme definitions
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: HashMap<ThemeKey, ThemeDefinition>,
    fallback: ThemeDefinition,
}

impl ThemeCatalog {
    /// Catalog of the built-in themes
    pub fn new() -> Self {
        Self::from_definitions(builtin_themes())
    }

    /// Build a catalog from custom definitions.
    ///
    /// Later definitions replace earlier ones with the same key. When no
    /// `other` definition is supplied the built-in one is used, so lookups
    /// stay total.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ThemeDefinition>) -> Self {
        let mut themes = HashMap::new();
        let mut fallback = None;

        for definition in definitions {
            if definition.key == ThemeKey::Other {
                fallback = Some(definition);
            } else {
                themes.insert(definition.key, definition);
            }
        }

        Self {
            themes,
            fallback: fallback.unwrap_or_else(other_theme),
        }
    }

    /// The process-wide catalog of built-in themes, initialized on first use
    pub fn global() -> &'static ThemeCatalog {
        GLOBAL_CATALOG.get_or_init(ThemeCatalog::new)
    }

    /// Look up a theme by its stored key, falling back to `other`
    pub fn lookup(&self, key: &str) -> &ThemeDefinition {
        match ThemeKey::parse(key) {
            Some(parsed) => self.get(parsed),
            None => {
                tracing::debug!(
                    target: "theme_catalog",
                    key,
                    "unrecognized event type, using the `other` theme"
                );
                &self.fallback
            }
        }
    }

    /// Look up a theme when the event type may be missing altogether
    pub fn lookup_opt(&self, key: Option<&str>) -> &ThemeDefinition {
        match key {
            Some(key) => self.lookup(key),
            None => &self.fallback,
        }
    }

    /// Theme for an already-parsed key
    pub fn get(&self, key: ThemeKey) -> &ThemeDefinition {
        self.themes.get(&key).unwrap_or(&self.fallback)
    }

    /// The fallback theme
    pub fn other(&self) -> &ThemeDefinition {
        &self.fallback
    }

    /// The fixed set of theme keys, for validating input elsewhere
    pub fn list_keys(&self) -> &'static [ThemeKey] {
        ThemeKey::ALL
    }

    /// All themes, in key order
    pub fn themes(&self) -> impl Iterator<Item = &ThemeDefinition> {
        ThemeKey::ALL.iter().map(move |key| self.get(*key))
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
