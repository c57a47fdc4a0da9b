//! Error types for the coin-flip core.

use serde::{Deserialize, Serialize};

/// Errors raised by validated assignments and construction.
///
/// Duration, frame rate and height inputs are numeric and silently
/// normalized where possible; only genuinely unusable inputs are rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoinError {
    /// Value outside {heads, tails, blank} or the recognized legacy aliases
    #[error("invalid coin value: {got} (expected \"heads\", \"tails\", \"blank\", 0/false or 1/true)")]
    InvalidValue { got: String },

    /// Weight outside [0, 1]
    #[error("invalid coin weight: {weight} (must be within [0, 1])")]
    InvalidWeight { weight: f32 },

    /// Frame rate not positive and finite
    #[error("invalid frame rate: {fps} (must be positive and finite)")]
    InvalidFps { fps: f32 },

    /// Sprite bank slot with no image handle
    #[error("missing image for sprite slot: {slot}")]
    MissingAsset { slot: String },
}
