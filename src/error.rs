//! Error types for doggo-discriminator
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::model::EntityKind;

/// All error types that can occur while labeling
#[derive(Debug, Error)]
pub enum LabelError {
    /// Email address failed format validation
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// URL failed to parse or is not http(s)
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// An identifiable was compared to something outside the family
    #[error("Unsupported comparison: {lhs} cannot be compared to {rhs}")]
    UnsupportedComparison { lhs: EntityKind, rhs: String },

    /// Remote source could not produce a datum
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Image could not be decoded or rendered
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for labeling operations
pub type Result<T> = std::result::Result<T, LabelError>;
