//! Error types for batch planning

use print_layout::LayoutError;
use thiserror::Error;

/// Input problems caught before any planning runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event has no title")]
    MissingTitle,

    #[error("Batch has no QR payload")]
    MissingQrPayload,
}

/// Errors that stop a print plan from being built
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BatchError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
}

/// Errors reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Settings rejected: {0}")]
    Invalid(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, BatchError>;
