//! Per-frame simulation step
//!
//! One [`tick`] advances the whole world by a bounded delta-time: cosmetic
//! scroll, bird kinematics, the obstacle stream, then collision checks.
//! Action inputs (jump key, tap) all funnel through
//! [`dispatch_action_input`], which routes them by the current phase. Inputs
//! arrive synchronously from the event context, so two taps between frames
//! both apply.

use crate::consts::*;
use crate::persistence::BestScoreStore;

use super::collision::check_collisions;
use super::pipes::update_pipes;
use super::state::{GamePhase, GameState};

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, dt: f32, store: &mut dyn BestScoreStore) {
    state.elapsed += dt;
    update_camera(state, dt);
    update_bird(state, dt);
    update_pipes(state, dt, store);
    check_collisions(state);
}

/// The single input entry point: start, flap, or reset depending on phase
pub fn dispatch_action_input(state: &mut GameState) {
    match state.phase {
        GamePhase::Ready => {
            state.phase = GamePhase::Playing;
            flap(state);
            log::info!("round started (seed {})", state.seed);
        }
        GamePhase::Playing => flap(state),
        GamePhase::GameOver => state.reset_round(),
    }
}

/// Apply the upward impulse: velocity is overwritten, not accumulated
fn flap(state: &mut GameState) {
    state.bird.vy = FLAP_VELOCITY;
    state.bird.wing_phase = FLAP_WING_PHASE;
}

/// Cosmetic ground/cloud scroll; runs in every phase
fn update_camera(state: &mut GameState, dt: f32) {
    let camera = &mut state.camera;
    camera.ground_offset = (camera.ground_offset + PIPE_SPEED * dt) % GROUND_TILE;
    camera.cloud_offset = (camera.cloud_offset + PIPE_SPEED * CLOUD_PARALLAX * dt) % WORLD_WIDTH;
}

/// Bird kinematics: idle bob in Ready, gravity integration otherwise.
///
/// Physics keep running during GameOver so a bird killed mid-air still falls
/// to the floor and stays pinned there. The Ready bob is driven by the
/// accumulated `elapsed` value rather than an ambient clock read.
fn update_bird(state: &mut GameState, dt: f32) {
    let bird = &mut state.bird;

    if state.phase == GamePhase::Ready {
        bird.wing_phase += dt * WING_RATE_IDLE;
        bird.pos.y = BIRD_START_Y + (state.elapsed * IDLE_BOB_RATE).sin() * IDLE_BOB_AMPLITUDE;
        bird.rotation = (state.elapsed * IDLE_TILT_RATE).sin() * IDLE_TILT_AMPLITUDE;
        return;
    }

    bird.vy = (bird.vy + GRAVITY * dt).clamp(MIN_RISE_SPEED, MAX_FALL_SPEED);
    bird.pos.y += bird.vy * dt;
    bird.wing_phase += dt * WING_RATE_PLAYING;
    bird.rotation = (bird.vy / MAX_FALL_SPEED * ROTATION_SCALE).clamp(ROTATION_MIN, ROTATION_MAX);

    // Motion clamp at the floor; the lethal ground check re-derives this
    // boundary independently in the collision pass
    let floor = FLOOR_Y - bird.radius;
    if bird.pos.y > floor {
        bird.pos.y = floor;
        bird.vy = 0.0;
        bird.rotation = ROTATION_MAX;
    }
}
