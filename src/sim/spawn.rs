//! Randomized field seeding

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::SimState;
use crate::consts::SPAWN_MARGIN;
use crate::settings::Settings;

/// Populate the field with `settings.starting_balls` randomized balls.
///
/// Positions are uniform inside a margin from the walls, velocity components
/// and radii uniform in the configured ranges, colors drawn from the palette.
/// Deterministic for a given RNG state.
pub fn seed_field(sim: &mut SimState, settings: &Settings, rng: &mut Pcg32) {
    // Margin keeps spawns clear of walls; clamped against both half-extents
    // so the sample ranges stay non-empty on small windows. Validation
    // guarantees each dimension exceeds twice the largest spawn radius.
    let r_max = settings.radius_range.1;
    let margin = SPAWN_MARGIN
        .min(sim.width() / 2.0 - r_max)
        .min(sim.height() / 2.0 - r_max)
        .max(r_max);
    let (v_min, v_max) = settings.speed_range;
    let (r_min, r_max) = settings.radius_range;

    for _ in 0..settings.starting_balls {
        let pos = Vec2::new(
            rng.random_range(margin..=sim.width() - margin),
            rng.random_range(margin..=sim.height() - margin),
        );
        let vel = Vec2::new(
            rng.random_range(v_min..=v_max),
            rng.random_range(v_min..=v_max),
        );
        let color = settings.palette[rng.random_range(0..settings.palette.len())];
        let radius = rng.random_range(r_min..=r_max);
        sim.add_ball(pos, vel, color, radius);
    }
    log::info!("seeded {} starting balls", settings.starting_balls);
}
