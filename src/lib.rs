//! Ball Pit - a tiny 2D color-mixing ball toy
//!
//! Core modules:
//! - `sim`: The simulation engine (ball motion, collisions, pickup/release)
//! - `settings`: Validated start-up configuration
//! - `error`: Crate-wide error type
//!
//! The engine is pure and single-threaded: the frontend feeds it interaction
//! calls and one `update(dt)` per frame, then reads back a read-only view of
//! the balls for drawing.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration defaults, matching the classic 800x600 toy
pub mod consts {
    use crate::sim::Rgb;

    /// Default window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Default frame-rate target
    pub const TARGET_FPS: u32 = 60;
    /// Upper bound on per-frame dt fed to the engine; a longer stall would
    /// tunnel fast balls through walls
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Number of balls spawned at start-up
    pub const STARTING_BALLS: usize = 10;
    /// Keeps spawned centers away from the walls
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Pickup search radius around the cursor
    pub const SUCK_RADIUS: f32 = 50.0;
    /// Side length of the top-right delete zone
    pub const DELETE_ZONE_SIZE: f32 = 100.0;

    /// Spawn ranges for randomized balls
    pub const BALL_RADIUS_MIN: f32 = 10.0;
    pub const BALL_RADIUS_MAX: f32 = 20.0;
    /// Per-component speed magnitude, units/second
    pub const BALL_SPEED_MAX: f32 = 100.0;

    /// Starting color palette
    pub const INITIAL_PALETTE: [Rgb; 8] = [
        Rgb::new(255, 0, 0),
        Rgb::new(0, 255, 0),
        Rgb::new(0, 0, 255),
        Rgb::new(255, 255, 0),
        Rgb::new(255, 0, 255),
        Rgb::new(0, 255, 255),
        Rgb::new(255, 165, 0),
        Rgb::new(128, 0, 128),
    ];
}
