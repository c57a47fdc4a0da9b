//! 2D position math and the flip arc.

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// 2D position/offset in the host's unit space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sinusoidal rise-and-fall between `start` and `apex`.
///
/// `duration` is the half-cycle parameter: the curve leaves `start` at
/// `time == 0`, peaks at `apex` at `time == duration`, and returns to
/// `start` at `time == 2 * duration`. Callers animating a full flip pass
/// half the flip duration so the coin rises and falls exactly once.
#[inline]
pub fn sinusoidal_arc(start: Vec2, apex: Vec2, duration: f32, time: f32) -> Vec2 {
    if duration <= 0.0 {
        return start;
    }
    let phase = (std::f32::consts::FRAC_PI_2 * time / duration).sin();
    Vec2 {
        x: lerp_f32(start.x, apex.x, phase),
        y: lerp_f32(start.y, apex.y, phase),
    }
}
