//! Ball entity and wall-bounce motion

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable ball identity, assigned monotonically and never reused.
pub type BallId = u32;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend two colors by truncating per-channel average.
    ///
    /// Symmetric, and a fixed point on equal inputs: `mix(c, c) == c`.
    pub fn mix(self, other: Self) -> Self {
        fn avg(a: u8, b: u8) -> u8 {
            ((u16::from(a) + u16::from(b)) / 2) as u8
        }
        Self {
            r: avg(self.r, other.r),
            g: avg(self.g, other.g),
            b: avg(self.b, other.b),
        }
    }
}

/// A ball entity.
///
/// Lives either on the field or in the inventory, never both; moving between
/// the two preserves identity, color and radius.
#[derive(Debug, Clone)]
pub struct Ball {
    pub id: BallId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Always positive
    pub radius: f32,
    pub color: Rgb,
}

impl Ball {
    /// Integrate one Euler step and reflect off the screen edges.
    ///
    /// Each axis is handled independently, so a corner hit reflects both
    /// components in the same step. Reflection clamps the center to the
    /// tangent position and flips the velocity sign; no energy is lost.
    /// After this call the center lies in `[r, width-r] x [r, height-r]`.
    pub fn advance(&mut self, dt: f32, width: f32, height: f32) {
        self.pos += self.vel * dt;

        if self.pos.x - self.radius <= 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x;
        } else if self.pos.x + self.radius >= width {
            self.pos.x = width - self.radius;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y - self.radius <= 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
        } else if self.pos.y + self.radius >= height {
            self.pos.y = height - self.radius;
            self.vel.y = -self.vel.y;
        }
    }
}
