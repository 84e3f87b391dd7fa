//! Paper sizes
//!
//! Sheet dimensions are stored in millimetres, portrait orientation. The
//! usable area is the sheet minus its margin on all four sides.

use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default margin kept clear on every edge of a sheet
pub const DEFAULT_MARGIN_MM: f64 = 10.0;

/// Process-wide registry of the built-in paper sizes
static GLOBAL_PAPERS: OnceLock<PaperRegistry> = OnceLock::new();

// =============================================================================
// Paper Size Presets
// =============================================================================

/// Standard paper sizes supported for card sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperSizePreset {
    /// A3 (297mm x 420mm)
    A3,
    /// A4 (210mm x 297mm)
    A4,
    /// A5 (148mm x 210mm)
    A5,
    /// US Letter (8.5" x 11")
    Letter,
}

impl PaperSizePreset {
    pub const ALL: [PaperSizePreset; 4] = [
        PaperSizePreset::A4,
        PaperSizePreset::A3,
        PaperSizePreset::A5,
        PaperSizePreset::Letter,
    ];

    /// Sheet dimensions in millimetres (width, height), portrait
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PaperSizePreset::A3 => (297.0, 420.0),
            PaperSizePreset::A4 => (210.0, 297.0),
            PaperSizePreset::A5 => (148.0, 210.0),
            PaperSizePreset::Letter => (215.9, 279.4), // 8.5" x 11"
        }
    }

    /// Get the preset name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            PaperSizePreset::A3 => "A3",
            PaperSizePreset::A4 => "A4",
            PaperSizePreset::A5 => "A5",
            PaperSizePreset::Letter => "Letter",
        }
    }

    /// Classic cards-per-sheet choices for this paper, smallest first
    pub fn recommended_counts(&self) -> &'static [u32] {
        match self {
            PaperSizePreset::A3 => &[8, 12, 16, 20],
            PaperSizePreset::A4 => &[6, 8, 12],
            PaperSizePreset::A5 => &[2, 4, 6],
            PaperSizePreset::Letter => &[6, 8, 12],
        }
    }

    pub fn spec(&self) -> PaperSizeSpec {
        let (width, height) = self.dimensions_mm();
        PaperSizeSpec {
            name: self.display_name().to_string(),
            printable_width_mm: width,
            printable_height_mm: height,
            margin_mm: DEFAULT_MARGIN_MM,
            recommended_counts: self.recommended_counts().to_vec(),
        }
    }
}

// =============================================================================
// Paper Size Spec
// =============================================================================

/// A sheet a batch can be printed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperSizeSpec {
    pub name: String,
    /// Full sheet width in millimetres
    pub printable_width_mm: f64,
    /// Full sheet height in millimetres
    pub printable_height_mm: f64,
    /// Margin kept clear on each edge
    pub margin_mm: f64,
    /// Classic cards-per-sheet presets, smallest first
    #[serde(default)]
    pub recommended_counts: Vec<u32>,
}

impl PaperSizeSpec {
    pub fn new(name: impl Into<String>, width_mm: f64, height_mm: f64, margin_mm: f64) -> Self {
        Self {
            name: name.into(),
            printable_width_mm: width_mm,
            printable_height_mm: height_mm,
            margin_mm,
            recommended_counts: Vec::new(),
        }
    }

    pub fn with_recommended_counts(mut self, counts: impl Into<Vec<u32>>) -> Self {
        self.recommended_counts = counts.into();
        self
    }

    /// Width left for cards once both side margins are removed
    pub fn usable_width_mm(&self) -> f64 {
        self.printable_width_mm - 2.0 * self.margin_mm
    }

    /// Height left for cards once top and bottom margins are removed
    pub fn usable_height_mm(&self) -> f64 {
        self.printable_height_mm - 2.0 * self.margin_mm
    }

    pub fn has_usable_area(&self) -> bool {
        self.usable_width_mm() > 0.0 && self.usable_height_mm() > 0.0
    }

    /// Largest recommended cards-per-sheet count, if the paper lists any
    pub fn max_recommended_count(&self) -> Option<u32> {
        self.recommended_counts.iter().copied().max()
    }
}

// =============================================================================
// Paper Registry
// =============================================================================

/// Lookup table of the paper sizes a print request may name
#[derive(Debug, Clone, PartialEq)]
pub struct PaperRegistry {
    papers: Vec<PaperSizeSpec>,
}

impl PaperRegistry {
    /// Registry of the built-in presets
    pub fn new() -> Self {
        Self::from_specs(PaperSizePreset::ALL.iter().map(|preset| preset.spec()))
    }

    /// Registry of custom specs. A later spec replaces an earlier one with
    /// the same name.
    pub fn from_specs(specs: impl IntoIterator<Item = PaperSizeSpec>) -> Self {
        let mut papers: Vec<PaperSizeSpec> = Vec::new();
        for spec in specs {
            match papers
                .iter_mut()
                .find(|existing| existing.name.eq_ignore_ascii_case(&spec.name))
            {
                Some(existing) => *existing = spec,
                None => papers.push(spec),
            }
        }
        Self { papers }
    }

    /// The process-wide registry of built-in presets, initialized on first use
    pub fn global() -> &'static PaperRegistry {
        GLOBAL_PAPERS.get_or_init(PaperRegistry::new)
    }

    /// Find a paper by name, ignoring case and surrounding whitespace
    pub fn get(&self, name: &str) -> Option<&PaperSizeSpec> {
        let name = name.trim();
        self.papers
            .iter()
            .find(|paper| paper.name.eq_ignore_ascii_case(name))
    }

    /// Like [`get`](Self::get) but reports unknown names as an error
    pub fn lookup(&self, name: &str) -> Result<&PaperSizeSpec> {
        self.get(name)
            .ok_or_else(|| LayoutError::UnknownPaperSize(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.papers.iter().map(|paper| paper.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

impl Default for PaperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_usable_area() {
        let a4 = PaperSizePreset::A4.spec();
        assert_eq!(a4.name, "A4");
        assert_eq!(a4.usable_width_mm(), 190.0);
        assert_eq!(a4.usable_height_mm(), 277.0);
        assert_eq!(a4.max_recommended_count(), Some(12));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let registry = PaperRegistry::new();
        assert_eq!(registry.get("a4").unwrap().name, "A4");
        assert_eq!(registry.get(" LETTER ").unwrap().name, "Letter");
        assert!(registry.get("B5").is_none());
    }

    #[test]
    fn test_lookup_unknown_is_error() {
        let registry = PaperRegistry::new();
        assert_eq!(
            registry.lookup("Tabloid"),
            Err(LayoutError::UnknownPaperSize("Tabloid".to_string()))
        );
    }

    #[test]
    fn test_builtin_names() {
        let registry = PaperRegistry::global();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["A4", "A3", "A5", "Letter"]);
    }

    #[test]
    fn test_custom_spec_replaces_same_name() {
        let registry = PaperRegistry::from_specs(vec![
            PaperSizePreset::A4.spec(),
            PaperSizeSpec::new("a4", 210.0, 297.0, 5.0),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("A4").unwrap().margin_mm, 5.0);
    }

    #[test]
    fn test_margin_wider_than_sheet_has_no_area() {
        let paper = PaperSizeSpec::new("Tiny", 15.0, 15.0, 10.0);
        assert!(!paper.has_usable_area());
        assert!(PaperSizePreset::A5.spec().has_usable_area());
    }

    #[test]
    fn test_spec_serde_camel_case() {
        let json = serde_json::to_value(PaperSizePreset::A5.spec()).unwrap();
        assert_eq!(json["printableWidthMm"], 148.0);
        assert_eq!(json["marginMm"], 10.0);
    }
}
