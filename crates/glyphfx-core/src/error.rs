//! Model errors.

use thiserror::Error;

/// Errors raised when a model violates its invariants.
///
/// Only the JSON edge produces these; builders and the migrator always
/// yield valid models.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("Text effect has no layers")]
    EmptyLayers,
    #[error("Linear gradient needs at least 2 stops, got {0}")]
    GradientStops(usize),
    #[error("Unsupported text effect version: {0}")]
    UnsupportedVersion(u32),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for model operations.
pub type EffectResult<T> = Result<T, EffectError>;
