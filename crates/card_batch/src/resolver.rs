//! Presentation resolution
//!
//! Each color slot is resolved on its own, highest source first:
//!
//! 1. the event's custom color, if set
//! 2. the selected template's color, if set
//! 3. the theme's color for the event type
//! 4. the fallback palette
//!
//! A blank string at any level counts as unset. Logo and banner come from the
//! event override or the template, never from the theme. Motifs always come
//! from the theme.

use crate::settings::FallbackPalette;
use serde::{Deserialize, Serialize};
use theme_catalog::{ColorField, Motif, TemplateDefinition, ThemeCatalog, ThemeKey};

// =============================================================================
// Event Overrides
// =============================================================================

/// Any subset of the four color slots an event may override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomColors {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

impl CustomColors {
    pub fn get(&self, field: ColorField) -> Option<&str> {
        let value = match field {
            ColorField::Primary => &self.primary_color,
            ColorField::Secondary => &self.secondary_color,
            ColorField::Background => &self.background_color,
            ColorField::Text => &self.text_color,
        };
        non_blank(value.as_deref())
    }

    pub fn set(&mut self, field: ColorField, color: impl Into<String>) {
        let slot = match field {
            ColorField::Primary => &mut self.primary_color,
            ColorField::Secondary => &mut self.secondary_color,
            ColorField::Background => &mut self.background_color,
            ColorField::Text => &mut self.text_color,
        };
        *slot = Some(color.into());
    }
}

/// Per-event customizations that win over template and theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventOverrides {
    pub custom_colors: CustomColors,
    pub custom_logo: Option<String>,
    pub banner_image: Option<String>,
    pub custom_message: Option<String>,
}

impl EventOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, field: ColorField, color: impl Into<String>) -> Self {
        self.custom_colors.set(field, color);
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.custom_logo = Some(logo.into());
        self
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner_image = Some(banner.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Presentation Config
// =============================================================================

/// The fully resolved look of every card in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub logo_ref: Option<String>,
    pub banner_ref: Option<String>,
    pub theme_key: ThemeKey,
    pub motifs: Vec<Motif>,
    pub custom_message: Option<String>,
}

impl PresentationConfig {
    pub fn color(&self, field: ColorField) -> &str {
        match field {
            ColorField::Primary => &self.primary_color,
            ColorField::Secondary => &self.secondary_color,
            ColorField::Background => &self.background_color,
            ColorField::Text => &self.text_color,
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Merges theme, template, and event overrides into a [`PresentationConfig`]
#[derive(Debug, Clone)]
pub struct ConfigResolver<'a> {
    catalog: &'a ThemeCatalog,
    palette: FallbackPalette,
}

impl ConfigResolver<'static> {
    /// Resolver over the global theme catalog and default palette
    pub fn new() -> Self {
        Self::with_catalog(ThemeCatalog::global(), FallbackPalette::default())
    }
}

impl Default for ConfigResolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ConfigResolver<'a> {
    pub fn with_catalog(catalog: &'a ThemeCatalog, palette: FallbackPalette) -> Self {
        Self { catalog, palette }
    }

    pub fn catalog(&self) -> &'a ThemeCatalog {
        self.catalog
    }

    /// Resolve the presentation for an event type.
    ///
    /// Unknown event types resolve against the `other` theme. The result only
    /// depends on the arguments, so equal inputs give equal configs.
    pub fn resolve(
        &self,
        event_type: &str,
        template: Option<&TemplateDefinition>,
        overrides: Option<&EventOverrides>,
    ) -> PresentationConfig {
        let theme = self.catalog.lookup(event_type);

        let color = |field: ColorField| -> String {
            overrides
                .and_then(|o| o.custom_colors.get(field))
                .or_else(|| template.and_then(|t| t.color(field)))
                .or_else(|| non_blank(Some(theme.color(field))))
                .unwrap_or_else(|| self.palette.color(field))
                .to_string()
        };

        let logo_ref = overrides
            .and_then(|o| non_blank(o.custom_logo.as_deref()))
            .or_else(|| template.and_then(|t| t.logo()))
            .map(str::to_string);

        let banner_ref = overrides
            .and_then(|o| non_blank(o.banner_image.as_deref()))
            .or_else(|| template.and_then(|t| t.banner()))
            .map(str::to_string);

        let custom_message = overrides
            .and_then(|o| non_blank(o.custom_message.as_deref()))
            .map(str::to_string);

        PresentationConfig {
            primary_color: color(ColorField::Primary),
            secondary_color: color(ColorField::Secondary),
            background_color: color(ColorField::Background),
            text_color: color(ColorField::Text),
            logo_ref,
            banner_ref,
            theme_key: theme.key,
            motifs: theme.motifs.clone(),
            custom_message,
        }
    }
}
