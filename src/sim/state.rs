//! Engine state container: the field, the inventory, and the delete zone

use std::collections::{HashSet, VecDeque};

use glam::Vec2;

use super::ball::{Ball, BallId, Rgb};
use super::collision;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// The simulation engine.
///
/// Owns every ball, split between two disjoint ordered collections: the
/// on-field list (simulated and drawn) and the inventory queue (held in
/// acquisition order, awaiting release). The frontend drives it with one
/// [`update`](Self::update) per frame plus [`pickup`](Self::pickup) and
/// [`release`](Self::release) for mouse interaction, and reads state back
/// through [`balls`](Self::balls) and [`inventory_len`](Self::inventory_len).
#[derive(Debug, Clone)]
pub struct SimState {
    width: f32,
    height: f32,
    /// Side length of the square delete zone in the top-right corner
    delete_zone_size: f32,
    field: Vec<Ball>,
    inventory: VecDeque<Ball>,
    /// Pairs that already mixed this frame; cleared at the start of `update`
    collided: HashSet<(BallId, BallId)>,
    next_id: BallId,
}

impl SimState {
    /// Create an empty engine for a `width` x `height` play area.
    ///
    /// Dimensions must be positive and the zone side non-negative; anything
    /// else is a construction-time error, never handled per-frame.
    pub fn new(width: f32, height: f32, delete_zone_size: f32) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "screen dimensions must be positive, got {width}x{height}"
            )));
        }
        if delete_zone_size < 0.0 {
            return Err(Error::InvalidConfig(
                "delete_zone_size must not be negative".into(),
            ));
        }
        Ok(Self {
            width,
            height,
            delete_zone_size,
            field: Vec::new(),
            inventory: VecDeque::new(),
            collided: HashSet::new(),
            next_id: 0,
        })
    }

    /// Create an engine sized from validated settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Self::new(settings.width, settings.height, settings.delete_zone_size)
    }

    /// Add a new ball to the field and return its handle.
    ///
    /// # Panics
    /// A non-positive radius is a programmer error and panics.
    pub fn add_ball(&mut self, pos: Vec2, vel: Vec2, color: Rgb, radius: f32) -> BallId {
        assert!(radius > 0.0, "ball radius must be positive, got {radius}");
        let id = self.next_id;
        self.next_id += 1;
        self.field.push(Ball {
            id,
            pos,
            vel,
            radius,
            color,
        });
        id
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Order per frame: clear the collided-pair set, move every ball (with
    /// wall reflection), drop balls whose centers sit in the delete zone,
    /// then run the color-mixing pass over the survivors. Negative `dt` is
    /// invalid input and is clamped to zero rather than run time backwards.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.collided.clear();

        for ball in &mut self.field {
            ball.advance(dt, self.width, self.height);
        }

        let zone_left = self.width - self.delete_zone_size;
        let zone_bottom = self.delete_zone_size;
        let width = self.width;
        self.field.retain(|ball| {
            let doomed = in_zone(ball.pos, zone_left, zone_bottom, width);
            if doomed {
                log::debug!("ball {} entered the delete zone, dropping it", ball.id);
            }
            !doomed
        });

        collision::resolve_collisions(&mut self.field, &mut self.collided);
    }

    /// Move the nearest on-field ball within `radius` of `point` into the
    /// inventory and return its handle.
    ///
    /// The threshold starts at `radius`, so a ball at exactly that distance
    /// never qualifies; ties go to the first ball reaching the minimum in
    /// field order. Returns `None` (state untouched) when nothing is in
    /// range. Holding the button and calling this every frame is safe:
    /// picked balls have already left the field.
    pub fn pickup(&mut self, point: Vec2, radius: f32) -> Option<BallId> {
        let mut min_distance = radius;
        let mut closest = None;
        for (index, ball) in self.field.iter().enumerate() {
            let distance = ball.pos.distance(point);
            if distance < min_distance {
                min_distance = distance;
                closest = Some(index);
            }
        }

        let ball = self.field.remove(closest?);
        let id = ball.id;
        log::debug!("sucked ball {id} into the inventory");
        self.inventory.push_back(ball);
        Some(id)
    }

    /// Release the oldest inventory ball at `point` with velocity `vel` and
    /// return its handle, or `None` if the inventory is empty.
    pub fn release(&mut self, point: Vec2, vel: Vec2) -> Option<BallId> {
        let mut ball = self.inventory.pop_front()?;
        ball.pos = point;
        ball.vel = vel;
        let id = ball.id;
        log::debug!("spat ball {id} back onto the field");
        self.field.push(ball);
        Some(id)
    }

    /// Read-only view of the on-field balls, in insertion order.
    pub fn balls(&self) -> &[Ball] {
        &self.field
    }

    /// Number of balls held in the inventory.
    pub fn inventory_len(&self) -> usize {
        self.inventory.len()
    }

    /// Whether a point sits inside the delete zone (boundaries inclusive).
    pub fn in_delete_zone(&self, point: Vec2) -> bool {
        in_zone(
            point,
            self.width - self.delete_zone_size,
            self.delete_zone_size,
            self.width,
        )
    }

    /// Top-left corner and side length of the delete zone, for drawing.
    pub fn delete_zone(&self) -> (Vec2, f32) {
        (
            Vec2::new(self.width - self.delete_zone_size, 0.0),
            self.delete_zone_size,
        )
    }

    /// Resize the play area; the delete zone stays flush with the new right
    /// edge. Takes effect on the next `update`. Non-positive dimensions (a
    /// minimized window reports 0) are ignored, keeping the previous size.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::warn!("ignoring resize to {width}x{height}");
            return;
        }
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

fn in_zone(point: Vec2, zone_left: f32, zone_bottom: f32, width: f32) -> bool {
    point.x >= zone_left && point.x <= width && point.y >= 0.0 && point.y <= zone_bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SimState {
        SimState::new(800.0, 600.0, 100.0).unwrap()
    }

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);

    #[test]
    fn rejects_bad_dimensions() {
        assert!(SimState::new(0.0, 600.0, 100.0).is_err());
        assert!(SimState::new(800.0, -600.0, 100.0).is_err());
        assert!(SimState::new(800.0, 600.0, -1.0).is_err());
    }

    #[test]
    fn ids_are_monotonic_and_stable() {
        let mut sim = engine();
        let a = sim.add_ball(Vec2::new(100.0, 100.0), Vec2::ZERO, RED, 10.0);
        let b = sim.add_ball(Vec2::new(200.0, 100.0), Vec2::ZERO, RED, 10.0);
        assert!(b > a);
        // The id survives a round trip through the inventory
        let picked = sim.pickup(Vec2::new(100.0, 100.0), 50.0).unwrap();
        assert_eq!(picked, a);
        let released = sim.release(Vec2::new(50.0, 50.0), Vec2::ZERO).unwrap();
        assert_eq!(released, a);
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn zero_radius_ball_panics() {
        let mut sim = engine();
        sim.add_ball(Vec2::new(100.0, 100.0), Vec2::ZERO, RED, 0.0);
    }

    #[test]
    fn update_moves_balls() {
        let mut sim = engine();
        sim.add_ball(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0), RED, 10.0);
        sim.update(0.5);
        assert_eq!(sim.balls()[0].pos, Vec2::new(450.0, 300.0));
    }

    #[test]
    fn negative_dt_is_clamped_to_zero() {
        let mut sim = engine();
        sim.add_ball(Vec2::new(400.0, 300.0), Vec2::new(100.0, 50.0), RED, 10.0);
        sim.update(-1.0);
        assert_eq!(sim.balls()[0].pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn pickup_moves_nearest_ball_to_inventory() {
        let mut sim = engine();
        let far = sim.add_ball(Vec2::new(140.0, 100.0), Vec2::ZERO, RED, 10.0);
        let near = sim.add_ball(Vec2::new(110.0, 100.0), Vec2::ZERO, GREEN, 10.0);
        let picked = sim.pickup(Vec2::new(100.0, 100.0), 50.0).unwrap();
        assert_eq!(picked, near);
        assert_eq!(sim.balls().len(), 1);
        assert_eq!(sim.balls()[0].id, far);
        assert_eq!(sim.inventory_len(), 1);
    }

    #[test]
    fn pickup_threshold_is_strict() {
        let mut sim = engine();
        // Exactly at the suck radius: not eligible
        sim.add_ball(Vec2::new(150.0, 100.0), Vec2::ZERO, RED, 10.0);
        assert!(sim.pickup(Vec2::new(100.0, 100.0), 50.0).is_none());
        assert_eq!(sim.balls().len(), 1);
        assert_eq!(sim.inventory_len(), 0);
    }

    #[test]
    fn pickup_tie_goes_to_first_in_field_order() {
        let mut sim = engine();
        let first = sim.add_ball(Vec2::new(120.0, 100.0), Vec2::ZERO, RED, 10.0);
        let _second = sim.add_ball(Vec2::new(80.0, 100.0), Vec2::ZERO, GREEN, 10.0);
        let picked = sim.pickup(Vec2::new(100.0, 100.0), 50.0).unwrap();
        assert_eq!(picked, first);
    }

    #[test]
    fn pickup_miss_is_a_noop() {
        let mut sim = engine();
        sim.add_ball(Vec2::new(700.0, 500.0), Vec2::ZERO, RED, 10.0);
        assert!(sim.pickup(Vec2::new(100.0, 100.0), 50.0).is_none());
        assert_eq!(sim.balls().len(), 1);
        assert_eq!(sim.inventory_len(), 0);
    }

    #[test]
    fn release_is_fifo() {
        let mut sim = engine();
        let a = sim.add_ball(Vec2::new(100.0, 100.0), Vec2::ZERO, RED, 10.0);
        let b = sim.add_ball(Vec2::new(100.0, 100.0), Vec2::ZERO, GREEN, 12.0);
        let c = sim.add_ball(Vec2::new(100.0, 100.0), Vec2::ZERO, RED, 14.0);
        for _ in 0..3 {
            sim.pickup(Vec2::new(100.0, 100.0), 50.0).unwrap();
        }
        assert_eq!(sim.inventory_len(), 3);

        let out: Vec<BallId> = (0..3)
            .map(|_| sim.release(Vec2::new(400.0, 300.0), Vec2::ZERO).unwrap())
            .collect();
        assert_eq!(out, vec![a, b, c]);
        assert_eq!(sim.inventory_len(), 0);
        assert_eq!(sim.balls().len(), 3);
    }

    #[test]
    fn release_rewrites_position_and_velocity_only() {
        let mut sim = engine();
        sim.add_ball(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0), GREEN, 13.0);
        sim.pickup(Vec2::new(100.0, 100.0), 50.0).unwrap();
        sim.release(Vec2::new(400.0, 300.0), Vec2::new(-5.0, 7.0));
        let ball = &sim.balls()[0];
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(-5.0, 7.0));
        assert_eq!(ball.color, GREEN);
        assert_eq!(ball.radius, 13.0);
    }

    #[test]
    fn release_on_empty_inventory_is_a_noop() {
        let mut sim = engine();
        assert!(sim.release(Vec2::new(400.0, 300.0), Vec2::ZERO).is_none());
        assert!(sim.balls().is_empty());
    }

    #[test]
    fn delete_zone_boundaries_are_inclusive() {
        let sim = engine();
        assert!(sim.in_delete_zone(Vec2::new(700.0, 100.0)));
        assert!(sim.in_delete_zone(Vec2::new(800.0, 0.0)));
        assert!(sim.in_delete_zone(Vec2::new(750.0, 50.0)));
        assert!(!sim.in_delete_zone(Vec2::new(699.9, 50.0)));
        assert!(!sim.in_delete_zone(Vec2::new(750.0, 100.1)));
    }

    #[test]
    fn update_drops_balls_in_the_zone() {
        let mut sim = engine();
        sim.add_ball(Vec2::new(750.0, 10.0), Vec2::ZERO, RED, 10.0);
        sim.add_ball(Vec2::new(400.0, 300.0), Vec2::ZERO, GREEN, 10.0);
        sim.update(0.016);
        assert_eq!(sim.balls().len(), 1);
        assert_eq!(sim.balls()[0].color, GREEN);
    }

    #[test]
    fn doomed_ball_is_excluded_from_collisions_that_frame() {
        let mut sim = engine();
        // The two overlap, but one sits in the delete zone and must vanish
        // before the collision pass can touch the survivor's color.
        sim.add_ball(Vec2::new(705.0, 95.0), Vec2::ZERO, RED, 20.0);
        let survivor = sim.add_ball(Vec2::new(690.0, 105.0), Vec2::ZERO, GREEN, 20.0);
        sim.update(0.0);
        assert_eq!(sim.balls().len(), 1);
        assert_eq!(sim.balls()[0].id, survivor);
        assert_eq!(sim.balls()[0].color, GREEN);
    }

    #[test]
    fn overlapping_pairs_remix_every_frame() {
        // An isolated pair equalizes after one mix, so the per-frame
        // throttle reset only shows up through a chain: C overlaps B but
        // not A, and A's color keeps moving frame after frame.
        let mut sim = engine();
        sim.add_ball(Vec2::new(400.0, 300.0), Vec2::ZERO, Rgb::new(255, 0, 0), 15.0);
        sim.add_ball(Vec2::new(410.0, 300.0), Vec2::ZERO, Rgb::new(0, 0, 0), 15.0);
        sim.update(0.0);
        assert_eq!(sim.balls()[0].color, Rgb::new(127, 0, 0));
        assert_eq!(sim.balls()[1].color, Rgb::new(127, 0, 0));

        sim.add_ball(Vec2::new(436.0, 300.0), Vec2::ZERO, Rgb::new(255, 0, 0), 15.0);
        sim.update(0.0);
        // B picked up C's red; A is out of C's reach and unchanged
        assert_eq!(sim.balls()[0].color, Rgb::new(127, 0, 0));
        assert_eq!(sim.balls()[1].color, Rgb::new(191, 0, 0));
        assert_eq!(sim.balls()[2].color, Rgb::new(191, 0, 0));

        sim.update(0.0);
        // A-B remix this frame proves the skip-set was cleared
        assert_eq!(sim.balls()[0].color, Rgb::new(159, 0, 0));
        assert_eq!(sim.balls()[1].color, Rgb::new(175, 0, 0));
        assert_eq!(sim.balls()[2].color, Rgb::new(175, 0, 0));
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        // Minimized windows report zero dimensions mid-session
        let mut sim = engine();
        sim.set_screen_size(0.0, 0.0);
        assert_eq!(sim.width(), 800.0);
        assert_eq!(sim.height(), 600.0);
        sim.set_screen_size(1024.0, -1.0);
        assert_eq!(sim.width(), 800.0);
    }

    #[test]
    fn resize_reanchors_the_delete_zone() {
        let mut sim = engine();
        assert!(sim.in_delete_zone(Vec2::new(750.0, 50.0)));
        sim.set_screen_size(1000.0, 600.0);
        assert!(!sim.in_delete_zone(Vec2::new(750.0, 50.0)));
        assert!(sim.in_delete_zone(Vec2::new(950.0, 50.0)));
        let (origin, side) = sim.delete_zone();
        assert_eq!(origin, Vec2::new(900.0, 0.0));
        assert_eq!(side, 100.0);
    }
}
