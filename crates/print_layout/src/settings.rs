//! Planner tuning knobs

use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Hard ceiling on `max_requested_count`
pub const MAX_REQUESTED_COUNT_LIMIT: u32 = 100_000;

/// Settings that shape how the planner scores grids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Target card proportion, height / width (portrait > 1)
    pub card_aspect_ratio: f64,
    /// Cards narrower than this are only used when nothing wider fits
    pub min_card_width_mm: f64,
    /// Cards shorter than this are only used when nothing taller fits
    pub min_card_height_mm: f64,
    /// Upper bound on cards in one request, at most [`MAX_REQUESTED_COUNT_LIMIT`]
    pub max_requested_count: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            card_aspect_ratio: 1.22,
            min_card_width_mm: 50.0,
            min_card_height_mm: 50.0,
            max_requested_count: 10_000,
        }
    }
}

impl PlannerSettings {
    /// Check that every knob is usable by the planner
    pub fn validate(&self) -> Result<()> {
        if !(self.card_aspect_ratio.is_finite() && self.card_aspect_ratio > 0.0) {
            return Err(LayoutError::InvalidSettings(format!(
                "card_aspect_ratio must be positive, got {}",
                self.card_aspect_ratio
            )));
        }
        for (name, value) in [
            ("min_card_width_mm", self.min_card_width_mm),
            ("min_card_height_mm", self.min_card_height_mm),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::InvalidSettings(format!(
                    "{} must be zero or more, got {}",
                    name, value
                )));
            }
        }
        if self.max_requested_count == 0 || self.max_requested_count > MAX_REQUESTED_COUNT_LIMIT {
            return Err(LayoutError::InvalidSettings(format!(
                "max_requested_count must be between 1 and {}, got {}",
                MAX_REQUESTED_COUNT_LIMIT, self.max_requested_count
            )));
        }
        Ok(())
    }

    /// The request cap actually enforced, never above the hard ceiling
    pub fn effective_max_count(&self) -> u32 {
        self.max_requested_count.min(MAX_REQUESTED_COUNT_LIMIT)
    }
}
