//! Construction parameters for a coin.

use serde::{Deserialize, Serialize};

use crate::trajectory::Vec2;

/// Parameters for constructing a [`Coin`](crate::Coin).
///
/// All lengths are in the host's unit space. Defaults give a fair coin with
/// a half-unit flip height and a one-second flip at 18 sprite frames per
/// second.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinParams {
    /// Display name, used in log output.
    pub name: String,
    /// Face shown before the first flip. Accepts the enum names as well as
    /// the legacy `0`/`false` and `1`/`true` aliases; `null` shows the
    /// blank pose.
    #[serde(default)]
    pub start_value: serde_json::Value,
    /// Probability of landing heads, in [0, 1].
    pub weight: f32,
    /// Drawn size; `None` renders the image at its native scale.
    #[serde(default)]
    pub size: Option<Vec2>,
    /// Resting position.
    pub pos: Vec2,
    /// Vertical travel at the apex of the arc.
    pub flip_height: f32,
    /// Total animation run length in seconds; rounded up to a whole number
    /// of six-frame loops.
    pub flip_duration: f32,
    /// Sprite-cycle frame rate, independent of the render rate.
    pub fps: f32,
}

impl Default for CoinParams {
    fn default() -> Self {
        Self {
            name: "flip".to_string(),
            start_value: serde_json::Value::Null,
            weight: 0.5,
            size: None,
            pos: Vec2::ZERO,
            flip_height: 0.5,
            flip_duration: 1.0,
            fps: 18.0,
        }
    }
}
