//! Card templates
//!
//! A template is a reusable visual preset a customer can pick regardless of
//! event type. Templates come from stored records, so any color field may be
//! blank; a blank field counts as "not set".

use crate::theme::ColorField;
use serde::{Deserialize, Serialize};

/// A customer-selectable visual preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateDefinition {
    pub id: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    /// Logo image reference, passed through to the renderer
    pub logo_ref: Option<String>,
    /// Banner image reference, passed through to the renderer
    pub banner_ref: Option<String>,
}

impl TemplateDefinition {
    /// Create a template with no colors or images set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }

    pub fn with_secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = color.into();
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    pub fn with_logo(mut self, logo_ref: impl Into<String>) -> Self {
        self.logo_ref = Some(logo_ref.into());
        self
    }

    pub fn with_banner(mut self, banner_ref: impl Into<String>) -> Self {
        self.banner_ref = Some(banner_ref.into());
        self
    }

    /// The template's value for a color slot, if set
    pub fn color(&self, field: ColorField) -> Option<&str> {
        let value = match field {
            ColorField::Primary => &self.primary_color,
            ColorField::Secondary => &self.secondary_color,
            ColorField::Background => &self.background_color,
            ColorField::Text => &self.text_color,
        };
        Some(value.trim()).filter(|v| !v.is_empty())
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo_ref.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner_ref.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}
