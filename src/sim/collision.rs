//! Pairwise collision detection and color mixing
//!
//! Collisions never touch velocity or position: overlapping balls pass
//! through each other and only blend color. The plain O(n^2) scan is fine
//! for the tens of balls this toy runs; the pass is internal to
//! [`SimState::update`](super::SimState::update), so a broad-phase grid
//! could replace it without changing the public API.

use std::collections::HashSet;

use super::ball::{Ball, BallId};

/// Order-independent key for a pair of balls.
fn pair_key(a: BallId, b: BallId) -> (BallId, BallId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Run one color-mixing pass over every unordered pair of on-field balls.
///
/// A pair collides when the distance between centers is strictly below the
/// sum of radii (touching circles do not count). The first detection of a
/// pair within a frame mixes both balls to the same averaged color and
/// records the pair in `collided`; later detections in the same frame are
/// skipped. The caller clears `collided` once per frame, so a pair that
/// stays overlapped remixes every frame it remains in contact - intended
/// behavior, the colors keep drifting toward each other's average.
pub fn resolve_collisions(balls: &mut [Ball], collided: &mut HashSet<(BallId, BallId)>) {
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let key = pair_key(balls[i].id, balls[j].id);
            if collided.contains(&key) {
                continue;
            }

            let distance = balls[i].pos.distance(balls[j].pos);
            if distance < balls[i].radius + balls[j].radius {
                let mixed = balls[i].color.mix(balls[j].color);
                log::trace!(
                    "balls {} and {} collide, both now {:?}",
                    balls[i].id,
                    balls[j].id,
                    mixed
                );
                balls[i].color = mixed;
                balls[j].color = mixed;
                collided.insert(key);
            }
        }
    }
}
