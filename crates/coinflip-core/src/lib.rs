//! Coin-flip stimulus core (host-agnostic)
//!
//! Models a single flippable coin: a resting face image, a six-frame flip
//! animation with a sinusoidal rise-and-fall arc, and a weighted random
//! outcome. Frame advancement is a function of elapsed time rather than
//! draw-call count, so the flip keeps its wall-clock duration regardless of
//! render throughput.
//!
//! Rasterization, input polling, and asset file I/O belong to the host. The
//! seam is the [`DrawSurface`] trait plus the string image handles held by a
//! shared [`SpriteBank`].

pub mod config;
pub mod engine;
pub mod error;
pub mod face;
pub mod sprite;
pub mod state;
pub mod trajectory;

// Re-exports for consumers (hosts/adapters)
pub use config::CoinParams;
pub use engine::{Coin, CoinEvent, DrawSurface, Outputs};
pub use error::CoinError;
pub use face::Face;
pub use sprite::{CoinImage, SpriteBank, FRAME_COUNT};
pub use state::CoinState;
pub use trajectory::{sinusoidal_arc, Vec2};
