//! The simulation engine
//!
//! All gameplay state lives here. This module must stay pure:
//! - Driven once per frame by the caller, no clocks of its own
//! - Seeded RNG only (and only at spawn time)
//! - Stable field order (balls keep their insertion order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod spawn;
pub mod state;

pub use ball::{Ball, BallId, Rgb};
pub use spawn::seed_field;
pub use state::SimState;
