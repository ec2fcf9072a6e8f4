//! Start-up configuration
//!
//! Everything here is fixed at initialization; nothing is reconfigurable
//! mid-session. Settings can come from a JSON file or fall back to the
//! compiled-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::Rgb;

/// Validated game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window dimensions in logical pixels
    pub width: f32,
    pub height: f32,

    /// Frame-rate target for the main loop
    pub target_fps: u32,

    /// Number of randomized balls spawned at start-up
    pub starting_balls: usize,

    /// Pickup search radius around the cursor
    pub suck_radius: f32,

    /// Side length of the top-right delete zone
    pub delete_zone_size: f32,

    /// Colors assigned to starting balls
    pub palette: Vec<Rgb>,

    /// Min/max radius for randomized balls
    pub radius_range: (f32, f32),

    /// Min/max per-component velocity for randomized balls, units/second
    pub speed_range: (f32, f32),

    /// RNG seed for reproducible runs; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            starting_balls: STARTING_BALLS,
            suck_radius: SUCK_RADIUS,
            delete_zone_size: DELETE_ZONE_SIZE,
            palette: INITIAL_PALETTE.to_vec(),
            radius_range: (BALL_RADIUS_MIN, BALL_RADIUS_MAX),
            speed_range: (-BALL_SPEED_MAX, BALL_SPEED_MAX),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let settings: Settings = serde_json::from_str(&json)?;
                log::info!("loaded settings from {}", path.display());
                settings
            }
            None => {
                log::info!("using default settings");
                Self::default()
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Reject malformed configuration up front, before any frame runs.
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: impl Into<String>) -> Result<()> {
            Err(Error::InvalidConfig(msg.into()))
        }

        if !(self.width > 0.0 && self.height > 0.0) {
            return invalid(format!(
                "screen dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.target_fps == 0 {
            return invalid("target_fps must be at least 1");
        }
        if self.suck_radius <= 0.0 {
            return invalid("suck_radius must be positive");
        }
        if self.delete_zone_size < 0.0 {
            return invalid("delete_zone_size must not be negative");
        }
        if self.palette.is_empty() {
            return invalid("palette must contain at least one color");
        }
        let (r_min, r_max) = self.radius_range;
        if r_min <= 0.0 || r_min > r_max {
            return invalid(format!("radius_range ({r_min}, {r_max}) is invalid"));
        }
        if self.width <= 2.0 * r_max || self.height <= 2.0 * r_max {
            return invalid(format!(
                "screen {}x{} cannot fit a ball of radius {r_max}",
                self.width, self.height
            ));
        }
        let (v_min, v_max) = self.speed_range;
        if v_min > v_max {
            return invalid(format!("speed_range ({v_min}, {v_max}) is inverted"));
        }
        Ok(())
    }
}
