//! Error types for print layout planning

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Unknown paper size: {0}")]
    UnknownPaperSize(String),

    #[error("Invalid card count: {0} (must be at least 1)")]
    InvalidCount(i64),

    #[error("Card count {requested} exceeds the maximum of {max}")]
    CountTooLarge { requested: i64, max: u32 },

    #[error("Paper size {0} has no printable area inside its margins")]
    InvalidPaperSize(String),

    #[error("Invalid planner settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
