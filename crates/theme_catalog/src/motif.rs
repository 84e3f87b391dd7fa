//! Decorative motifs
//!
//! Motifs are opaque references; the renderer decides what glyph or icon
//! each one maps to.

use serde::{Deserialize, Serialize};

/// A small decorative glyph placed around a card's border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motif {
    Heart,
    Rings,
    Flower,
    Dove,
    Diamond,
    Sparkle,
    Balloon,
    Cake,
    Confetti,
    Gift,
    Rattle,
    Star,
    Cloud,
    Briefcase,
    Camera,
}

impl Motif {
    /// Stable reference string handed to the renderer
    pub fn as_str(&self) -> &'static str {
        match self {
            Motif::Heart => "heart",
            Motif::Rings => "rings",
            Motif::Flower => "flower",
            Motif::Dove => "dove",
            Motif::Diamond => "diamond",
            Motif::Sparkle => "sparkle",
            Motif::Balloon => "balloon",
            Motif::Cake => "cake",
            Motif::Confetti => "confetti",
            Motif::Gift => "gift",
            Motif::Rattle => "rattle",
            Motif::Star => "star",
            Motif::Cloud => "cloud",
            Motif::Briefcase => "briefcase",
            Motif::Camera => "camera",
        }
    }
}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
