//! Logical coin images and the shared sprite bank.
//!
//! The core never touches pixel data. Images are engine-agnostic `String`
//! handles the host resolves to real textures; one [`SpriteBank`] is built
//! once from the asset bundle and shared read-only across coins.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoinError;
use crate::face::Face;

/// Number of discrete sprite frames in one animation loop.
pub const FRAME_COUNT: usize = 6;

/// Logical image the coin currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinImage {
    /// One frame of the in-air animation cycle.
    Frame(usize),
    /// A settled face.
    Face(Face),
}

/// Image handles for the six animation frames plus the two face images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteBank {
    frames: Vec<String>,
    heads: String,
    tails: String,
}

impl SpriteBank {
    /// Build a bank, validating that every slot carries a handle.
    ///
    /// An incomplete bank is a construction-time error; there is no silent
    /// substitute image.
    pub fn new(
        frames: Vec<String>,
        heads: impl Into<String>,
        tails: impl Into<String>,
    ) -> Result<Arc<Self>, CoinError> {
        if frames.len() != FRAME_COUNT {
            return Err(CoinError::MissingAsset {
                slot: format!("frames ({} provided, {FRAME_COUNT} required)", frames.len()),
            });
        }
        for (i, frame) in frames.iter().enumerate() {
            if frame.is_empty() {
                return Err(CoinError::MissingAsset {
                    slot: format!("frame{}", i + 1),
                });
            }
        }
        let heads = heads.into();
        let tails = tails.into();
        if heads.is_empty() {
            return Err(CoinError::MissingAsset {
                slot: "heads".into(),
            });
        }
        if tails.is_empty() {
            return Err(CoinError::MissingAsset {
                slot: "tails".into(),
            });
        }
        Ok(Arc::new(Self {
            frames,
            heads,
            tails,
        }))
    }

    /// Resolve a logical image to its host handle.
    ///
    /// A blank coin shows the neutral first animation frame, matching the
    /// shipped asset set.
    #[inline]
    pub fn handle(&self, image: CoinImage) -> &str {
        match image {
            CoinImage::Frame(i) => &self.frames[i % FRAME_COUNT],
            CoinImage::Face(Face::Heads) => &self.heads,
            CoinImage::Face(Face::Tails) => &self.tails,
            CoinImage::Face(Face::Blank) => &self.frames[0],
        }
    }
}
