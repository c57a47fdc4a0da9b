//! Coin state: typed fields with validated setters.
//!
//! Every derived-field update (cached settled face, resting position,
//! normalized duration) happens inside one setter, so each invariant is
//! enforced at a single call site.

use std::sync::Arc;

use log::{debug, warn};

use crate::config::CoinParams;
use crate::error::CoinError;
use crate::face::Face;
use crate::sprite::{CoinImage, SpriteBank, FRAME_COUNT};
use crate::trajectory::Vec2;

/// Authoritative data holder for one coin.
///
/// Mutated in place for the life of a trial: the engine drives the frame
/// index, clocks and displayed image/position while a flip runs; hosts
/// mutate the rest through the validated setters.
#[derive(Debug, Clone)]
pub struct CoinState {
    pub(crate) name: String,
    pub(crate) value: Face,
    pub(crate) weight: f32,
    pub(crate) is_flipping: bool,
    pub(crate) resting_pos: Vec2,
    /// Apex displacement, stored as `(0, h)`.
    pub(crate) flip_height: Vec2,
    /// Always a positive whole number of `FRAME_COUNT / fps` loops.
    pub(crate) flip_duration: f32,
    pub(crate) fps: f32,
    /// Current sprite frame while flipping; `None` when idle.
    pub(crate) frame_index: Option<usize>,
    /// Seconds since the current sprite frame was shown.
    pub(crate) frame_elapsed: f32,
    /// Seconds since the current flip started.
    pub(crate) anim_elapsed: f32,
    pub(crate) settled_face: CoinImage,
    pub(crate) image: CoinImage,
    pub(crate) pos: Vec2,
    pub(crate) size: Option<Vec2>,
    pub(crate) sprites: Arc<SpriteBank>,
}

impl CoinState {
    pub fn new(params: &CoinParams, sprites: Arc<SpriteBank>) -> Result<Self, CoinError> {
        let value = Face::resolve(&params.start_value)?;
        let mut state = Self {
            name: params.name.clone(),
            value,
            weight: 0.5,
            is_flipping: false,
            resting_pos: params.pos,
            flip_height: Vec2::ZERO,
            flip_duration: 0.0,
            fps: 0.0,
            frame_index: None,
            frame_elapsed: 0.0,
            anim_elapsed: 0.0,
            settled_face: CoinImage::Face(value),
            image: CoinImage::Face(value),
            pos: params.pos,
            size: params.size,
            sprites,
        };
        state.set_weight(params.weight)?;
        state.set_fps(params.fps)?;
        state.set_flip_height(params.flip_height);
        state.set_flip_duration(params.flip_duration);
        Ok(state)
    }

    /// Assign a settled face from a loosely-typed value (enum name or a
    /// legacy alias), refreshing the cached face image.
    pub fn set_value(&mut self, input: &serde_json::Value) -> Result<Face, CoinError> {
        let face = Face::resolve(input)?;
        self.set_face(face);
        Ok(face)
    }

    /// Assign a settled face directly.
    ///
    /// The cached face image is refreshed together with the value; the
    /// displayed image follows immediately unless a flip is mid-air, in
    /// which case it is shown when the animation settles.
    pub fn set_face(&mut self, face: Face) {
        self.value = face;
        self.settled_face = CoinImage::Face(face);
        if !self.is_flipping {
            self.image = self.settled_face;
        }
    }

    pub fn set_weight(&mut self, weight: f32) -> Result<(), CoinError> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(CoinError::InvalidWeight { weight });
        }
        self.weight = weight;
        Ok(())
    }

    pub fn set_fps(&mut self, fps: f32) -> Result<(), CoinError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(CoinError::InvalidFps { fps });
        }
        self.fps = fps;
        // A normalized duration goes stale when the loop length changes;
        // renormalize against the new frame rate.
        if self.flip_duration > 0.0 {
            let renormalized = self.normalized_duration(self.flip_duration);
            if renormalized != self.flip_duration {
                debug!(
                    "coin '{}': fps change renormalized flip duration {} -> {renormalized}",
                    self.name, self.flip_duration
                );
            }
            self.flip_duration = renormalized;
        }
        Ok(())
    }

    /// Set the total animation run length, rounded up to the next whole
    /// number of loops so the sprite always settles on its neutral pose.
    pub fn set_flip_duration(&mut self, seconds: f32) {
        self.flip_duration = self.normalized_duration(seconds);
    }

    /// Set the vertical travel at the apex of the arc.
    pub fn set_flip_height(&mut self, height: f32) {
        self.flip_height = Vec2::new(0.0, height);
    }

    /// Size-like variant of [`set_flip_height`](Self::set_flip_height); only
    /// the vertical component is used.
    pub fn set_flip_height_size(&mut self, size: Vec2) {
        self.set_flip_height(size.y);
    }

    /// Move the coin. The resting position always reflects the last
    /// externally-set position, so both update together.
    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
        self.resting_pos = pos;
    }

    pub fn set_size(&mut self, size: Option<Vec2>) {
        self.size = size;
    }

    /// Smallest positive multiple of one loop (`FRAME_COUNT / fps`) that is
    /// at least `seconds`. Exact multiples pass through unchanged.
    fn normalized_duration(&self, seconds: f32) -> f32 {
        let loop_len = FRAME_COUNT as f64 / self.fps as f64;
        if !seconds.is_finite() || seconds <= 0.0 {
            warn!(
                "coin '{}': unusable flip duration {seconds}, falling back to one loop",
                self.name
            );
            return loop_len as f32;
        }
        // f64 with a small slack keeps e.g. 1.0s at 18fps (exactly 3 loops)
        // from rounding up to a 4th loop over float noise.
        let loops = (seconds as f64 / loop_len - 1e-6).ceil().max(1.0);
        (loops * loop_len) as f32
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Face {
        self.value
    }

    #[inline]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    #[inline]
    pub fn is_flipping(&self) -> bool {
        self.is_flipping
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn resting_pos(&self) -> Vec2 {
        self.resting_pos
    }

    #[inline]
    pub fn flip_height(&self) -> f32 {
        self.flip_height.y
    }

    #[inline]
    pub fn flip_duration(&self) -> f32 {
        self.flip_duration
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn frame_index(&self) -> Option<usize> {
        self.frame_index
    }

    #[inline]
    pub fn frame_elapsed(&self) -> f32 {
        self.frame_elapsed
    }

    #[inline]
    pub fn anim_elapsed(&self) -> f32 {
        self.anim_elapsed
    }

    #[inline]
    pub fn image(&self) -> CoinImage {
        self.image
    }

    #[inline]
    pub fn size(&self) -> Option<Vec2> {
        self.size
    }

    #[inline]
    pub fn sprites(&self) -> &Arc<SpriteBank> {
        &self.sprites
    }
}
