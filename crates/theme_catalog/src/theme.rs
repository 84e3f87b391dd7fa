//! Theme definitions
//!
//! A theme is the fixed visual identity of an event category: its palette,
//! the motifs sprinkled around the card, and how the card title is worded
//! from the event's participants.

use crate::motif::Motif;
use crate::participants::Participants;
use serde::{Deserialize, Serialize};

/// Derives a card title from participants; an empty string means "no title"
pub type TitleStrategy = fn(&Participants) -> String;

/// Derives the line printed under the title, if any
pub type SubtitleStrategy = fn(&Participants) -> Option<String>;

/// The fixed set of event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKey {
    Wedding,
    Engagement,
    Birthday,
    BabyShower,
    Corporate,
    Other,
}

impl ThemeKey {
    /// Every key, in catalog order
    pub const ALL: &'static [ThemeKey] = &[
        ThemeKey::Wedding,
        ThemeKey::Engagement,
        ThemeKey::Birthday,
        ThemeKey::BabyShower,
        ThemeKey::Corporate,
        ThemeKey::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKey::Wedding => "wedding",
            ThemeKey::Engagement => "engagement",
            ThemeKey::Birthday => "birthday",
            ThemeKey::BabyShower => "baby_shower",
            ThemeKey::Corporate => "corporate",
            ThemeKey::Other => "other",
        }
    }

    /// Parse a stored event-type string. Surrounding whitespace and case are
    /// ignored; anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four color slots a resolved card configuration fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorField {
    Primary,
    Secondary,
    Background,
    Text,
}

impl ColorField {
    pub const ALL: [ColorField; 4] = [
        ColorField::Primary,
        ColorField::Secondary,
        ColorField::Background,
        ColorField::Text,
    ];
}

/// A theme's palette, motifs, and wording rules
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    pub key: ThemeKey,
    pub display_name: String,
    /// Hex color values, e.g. "#B76E79"
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    /// Decorative motifs, in placement order
    pub motifs: Vec<Motif>,
    #[serde(skip)]
    pub title_strategy: TitleStrategy,
    #[serde(skip)]
    pub subtitle_strategy: SubtitleStrategy,
}

impl ThemeDefinition {
    /// Theme default for one color slot
    pub fn color(&self, field: ColorField) -> &str {
        match field {
            ColorField::Primary => &self.primary_color,
            ColorField::Secondary => &self.secondary_color,
            ColorField::Background => &self.background_color,
            ColorField::Text => &self.text_color,
        }
    }

    pub fn title_for(&self, participants: &Participants) -> String {
        (self.title_strategy)(participants)
    }

    pub fn subtitle_for(&self, participants: &Participants) -> Option<String> {
        (self.subtitle_strategy)(participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_str() {
        for key in ThemeKey::ALL {
            assert_eq!(ThemeKey::parse(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_key_parse_is_lenient_on_case_and_whitespace() {
        assert_eq!(ThemeKey::parse(" Wedding "), Some(ThemeKey::Wedding));
        assert_eq!(ThemeKey::parse("BABY_SHOWER"), Some(ThemeKey::BabyShower));
        assert_eq!(ThemeKey::parse("baby shower"), None);
        assert_eq!(ThemeKey::parse(""), None);
    }

    #[test]
    fn test_key_serde_uses_snake_case() {
        let json = serde_json::to_string(&ThemeKey::BabyShower).unwrap();
        assert_eq!(json, "\"baby_shower\"");
    }
}
