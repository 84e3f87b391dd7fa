//! Print settings
//!
//! This module provides loading and saving of the settings that tune batch
//! planning: grid scoring, the last-resort color palette, and how dates are
//! printed on cards.

use crate::error::SettingsError;
use print_layout::PlannerSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use theme_catalog::ColorField;

/// Date pattern used when none is configured, e.g. "June 14, 2025"
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

const FALLBACK_PRIMARY: &str = "#3B82F6";
const FALLBACK_SECONDARY: &str = "#8B5CF6";
const FALLBACK_BACKGROUND: &str = "#FFFFFF";
const FALLBACK_TEXT: &str = "#1F2937";

/// Settings container for batch planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Grid scoring
    pub planner: PlannerSettings,
    /// Colors used when neither override, template, nor theme sets one
    pub palette: FallbackPalette,
    /// chrono strftime pattern for the card's date line
    pub date_format: String,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            planner: PlannerSettings::default(),
            palette: FallbackPalette::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl PrintSettings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.planner.validate()?;
        Ok(settings)
    }
}

/// Last-resort colors for the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackPalette {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
}

impl Default for FallbackPalette {
    fn default() -> Self {
        Self {
            primary_color: FALLBACK_PRIMARY.to_string(),
            secondary_color: FALLBACK_SECONDARY.to_string(),
            background_color: FALLBACK_BACKGROUND.to_string(),
            text_color: FALLBACK_TEXT.to_string(),
        }
    }
}

impl FallbackPalette {
    /// Palette color for a slot; a blank configured value uses the built-in one
    pub fn color(&self, field: ColorField) -> &str {
        let (configured, builtin) = match field {
            ColorField::Primary => (&self.primary_color, FALLBACK_PRIMARY),
            ColorField::Secondary => (&self.secondary_color, FALLBACK_SECONDARY),
            ColorField::Background => (&self.background_color, FALLBACK_BACKGROUND),
            ColorField::Text => (&self.text_color, FALLBACK_TEXT),
        };
        let configured = configured.trim();
        if configured.is_empty() {
            builtin
        } else {
            configured
        }
    }
}

/// Loads and saves [`PrintSettings`] as a JSON file
pub struct SettingsLoader {
    /// Path to the settings file
    settings_path: PathBuf,
}

impl SettingsLoader {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings, or defaults if the file doesn't exist.
    ///
    /// A file that exists but doesn't parse or validate is logged and
    /// replaced by defaults; read failures are returned.
    pub fn load(&self) -> Result<PrintSettings, SettingsError> {
        if !self.settings_path.exists() {
            return Ok(PrintSettings::default());
        }

        let content = std::fs::read_to_string(&self.settings_path)?;
        match PrintSettings::from_json(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse print settings {:?}, using defaults: {}",
                    self.settings_path,
                    e
                );
                Ok(PrintSettings::default())
            }
        }
    }

    /// Load settings, reporting a malformed file instead of falling back
    pub fn load_strict(&self) -> Result<PrintSettings, SettingsError> {
        if !self.settings_path.exists() {
            return Ok(PrintSettings::default());
        }
        let content = std::fs::read_to_string(&self.settings_path)?;
        PrintSettings::from_json(&content)
    }

    /// Save settings to disk
    pub fn save(&self, settings: &PrintSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }
}
