//! Collision detection
//!
//! Circle-vs-rectangle tests between the bird and the pipe segments, plus
//! the playfield boundary rules: the ceiling bounces, the ground and the
//! pipes end the round. Pipe tests shrink the bird's circle by a small
//! forgiveness margin so grazing contact favors the player.

use glam::Vec2;

use crate::consts::*;

use super::state::{GamePhase, GameState};

/// Closest-point circle/rectangle intersection test.
///
/// Clamps the circle center into the rectangle per axis and compares the
/// squared distance to that clamped point against the squared radius.
pub fn circle_rect_collide(center: Vec2, radius: f32, rect_min: Vec2, rect_max: Vec2) -> bool {
    let nearest = center.clamp(rect_min, rect_max);
    center.distance_squared(nearest) <= radius * radius
}

/// Boundary and pipe checks; runs only while Playing.
///
/// Order matters: ceiling first (non-lethal bounce), then ground (lethal,
/// short-circuits), then pipes front to back (lethal, first hit wins).
pub fn check_collisions(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let bird = &mut state.bird;

    // Ceiling: clamp and bounce, the round continues
    if bird.pos.y - bird.radius <= 0.0 {
        bird.pos.y = bird.radius;
        bird.vy = CEILING_BOUNCE;
    }

    // Ground: lethal
    if bird.pos.y + bird.radius >= FLOOR_Y {
        bird.pos.y = FLOOR_Y - bird.radius;
        end_round(state);
        return;
    }

    let center = state.bird.pos;
    let radius = state.bird.radius - PIPE_HIT_MARGIN;
    let mut hit = false;
    for pipe in &state.pipes {
        let top = circle_rect_collide(
            center,
            radius,
            Vec2::new(pipe.x, 0.0),
            Vec2::new(pipe.trailing_edge(), pipe.top_height()),
        );
        let bottom = circle_rect_collide(
            center,
            radius,
            Vec2::new(pipe.x, pipe.bottom_y()),
            Vec2::new(pipe.trailing_edge(), FLOOR_Y),
        );
        if top || bottom {
            hit = true;
            break;
        }
    }
    if hit {
        end_round(state);
    }
}

/// Terminate the current round: zero the velocity and pin the bird nose-down
pub(crate) fn end_round(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.bird.vy = 0.0;
    state.bird.rotation = ROTATION_MAX;
    log::info!("round over: score {} (best {})", state.score, state.best);
}
