//! Flip state machine: weighted toss, per-tick frame advancement, arc
//! positioning, and the settle transition.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::config::CoinParams;
use crate::error::CoinError;
use crate::face::Face;
use crate::sprite::{CoinImage, SpriteBank, FRAME_COUNT};
use crate::state::CoinState;
use crate::trajectory::{sinusoidal_arc, Vec2};

/// Host seam for rasterization.
///
/// The core resolves *what* to draw (image handle, position, size); the
/// host owns how. Headless tests skip this trait entirely and call
/// [`Coin::tick`] directly.
pub trait DrawSurface {
    fn draw_image(&mut self, handle: &str, pos: Vec2, size: Option<Vec2>);
}

/// Discrete signals emitted while stepping, for hosts and tests that
/// observe transitions without polling state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoinEvent {
    /// A flip was accepted and its outcome drawn.
    FlipStarted { value: Face },
    /// The sprite cycle advanced to `index`.
    FrameAdvanced { index: usize },
    /// The animation completed and the coin settled.
    FlipSettled { value: Face },
}

/// Events accumulated since the last drain.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    pub events: Vec<CoinEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: CoinEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// A flippable coin: state plus the per-tick animation driver.
///
/// Single-threaded and draw-loop driven; every transition happens
/// synchronously inside [`flip_coin`](Self::flip_coin) or
/// [`tick`](Self::tick). An accepted flip always runs to completion.
pub struct Coin {
    state: CoinState,
    rng: Pcg64,
    outputs: Outputs,
}

impl Coin {
    /// Construct with an entropy-seeded RNG.
    pub fn new(params: &CoinParams, sprites: Arc<SpriteBank>) -> Result<Self, CoinError> {
        Self::with_rng(params, sprites, Pcg64::from_entropy())
    }

    /// Construct with a fixed seed, for reproducible outcome sequences.
    pub fn from_seed(
        params: &CoinParams,
        sprites: Arc<SpriteBank>,
        seed: u64,
    ) -> Result<Self, CoinError> {
        Self::with_rng(params, sprites, Pcg64::seed_from_u64(seed))
    }

    fn with_rng(
        params: &CoinParams,
        sprites: Arc<SpriteBank>,
        rng: Pcg64,
    ) -> Result<Self, CoinError> {
        Ok(Self {
            state: CoinState::new(params, sprites)?,
            rng,
            outputs: Outputs::default(),
        })
    }

    #[inline]
    pub fn state(&self) -> &CoinState {
        &self.state
    }

    /// Mutable state access; all mutation goes through the validated
    /// setters on [`CoinState`].
    #[inline]
    pub fn state_mut(&mut self) -> &mut CoinState {
        &mut self.state
    }

    #[inline]
    pub fn value(&self) -> Face {
        self.state.value
    }

    #[inline]
    pub fn is_flipping(&self) -> bool {
        self.state.is_flipping
    }

    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Take all events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<CoinEvent> {
        std::mem::take(&mut self.outputs.events)
    }

    /// Request a flip. Ignored while one is already running.
    ///
    /// The outcome is drawn immediately (heads with probability `weight`)
    /// and assigned as the pending value, so the settled face is ready
    /// before the animation ends; it is not shown until then.
    pub fn flip_coin(&mut self) {
        if self.state.is_flipping {
            trace!("coin '{}': flip requested mid-flip, ignored", self.state.name);
            return;
        }
        self.state.is_flipping = true;
        let face = if self.rng.gen_bool(f64::from(self.state.weight)) {
            Face::Heads
        } else {
            Face::Tails
        };
        self.state.set_face(face);
        debug!("coin '{}': flip started, will land {face}", self.state.name);
        self.outputs.push_event(CoinEvent::FlipStarted { value: face });
    }

    /// Advance the animation by `dt` seconds of wall-clock time. No-op
    /// while idle.
    ///
    /// Frame advancement is a function of accumulated time, not of call
    /// count: a coin ticked infrequently skips displayed frames to stay on
    /// its wall-clock schedule, never stretching the flip. At most one
    /// frame advances per tick, so the index still cycles strictly in
    /// order.
    pub fn tick(&mut self, dt: f32) {
        if !self.state.is_flipping {
            return;
        }

        if self.state.frame_index.is_none() {
            // First tick since the flip was accepted: start both clocks.
            self.state.frame_elapsed = 0.0;
            self.state.anim_elapsed = 0.0;
            self.state.frame_index = Some(0);
        } else {
            let dt = dt.max(0.0);
            self.state.frame_elapsed += dt;
            self.state.anim_elapsed += dt;
        }

        if let Some(index) = self.state.frame_index {
            // Sampled timer: strictly greater, so a tick landing exactly on
            // the frame period holds the current frame.
            if self.state.frame_elapsed > 1.0 / self.state.fps {
                let next = (index + 1) % FRAME_COUNT;
                self.state.frame_index = Some(next);
                self.state.image = CoinImage::Frame(next);
                self.state.frame_elapsed = 0.0;
                let apex = self.state.resting_pos + self.state.flip_height;
                self.state.pos = sinusoidal_arc(
                    self.state.resting_pos,
                    apex,
                    self.state.flip_duration / 2.0,
                    self.state.anim_elapsed,
                );
                trace!(
                    "coin '{}': frame {next} at t={}",
                    self.state.name,
                    self.state.anim_elapsed
                );
                self.outputs.push_event(CoinEvent::FrameAdvanced { index: next });
            }
        }

        if self.state.anim_elapsed > self.state.flip_duration {
            self.state.is_flipping = false;
            self.state.frame_index = None;
            self.state.image = self.state.settled_face;
            self.state.pos = self.state.resting_pos;
            debug!("coin '{}': settled on {}", self.state.name, self.state.value);
            self.outputs.push_event(CoinEvent::FlipSettled {
                value: self.state.value,
            });
        }
    }

    /// Advance timing, then render the resolved image.
    ///
    /// Timing is deliberately an explicit two-step contract: `tick` runs
    /// first, then the surface draws the current image at the current
    /// position. A coin drawn infrequently loses perceived smoothness but
    /// never wall-clock duration.
    pub fn draw(&mut self, dt: f32, surface: &mut dyn DrawSurface) {
        self.tick(dt);
        let handle = self.state.sprites.handle(self.state.image);
        surface.draw_image(handle, self.state.pos, self.state.size);
    }
}

impl fmt::Debug for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coin")
            .field("state", &self.state)
            .field("outputs", &self.outputs)
            .finish_non_exhaustive()
    }
}
