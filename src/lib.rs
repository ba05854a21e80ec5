//! Skyflap - a pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (frame clock, kinematics, obstacle
//!   stream, collisions, game state machine)
//! - `persistence`: Best-score storage collaborators
//!
//! Rendering and input binding live outside this crate. A frontend holds a
//! [`sim::GameState`], calls [`sim::FrameClock::delta`] and [`sim::tick`]
//! once per displayed frame, funnels every action input (jump key, tap)
//! through [`sim::dispatch_action_input`], and draws from
//! [`sim::GameState::snapshot`].

pub mod persistence;
pub mod sim;

pub use persistence::{BestScoreStore, FileStore, MemoryStore};
pub use sim::{FrameClock, GamePhase, GameState, dispatch_action_input, tick};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const WORLD_WIDTH: f32 = 600.0;
    pub const WORLD_HEIGHT: f32 = 800.0;
    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 120.0;
    /// Y of the floor line (top of the ground strip)
    pub const FLOOR_Y: f32 = WORLD_HEIGHT - GROUND_HEIGHT;

    /// Downward acceleration while airborne (units/s²)
    pub const GRAVITY: f32 = 1500.0;
    /// Velocity assigned by a flap impulse (negative is upward, units/s)
    pub const FLAP_VELOCITY: f32 = -430.0;
    /// Terminal fall speed (units/s)
    pub const MAX_FALL_SPEED: f32 = 700.0;
    /// Hard lower bound on vertical velocity (units/s)
    pub const MIN_RISE_SPEED: f32 = -1000.0;
    /// Small downward velocity applied when bouncing off the ceiling
    pub const CEILING_BOUNCE: f32 = 80.0;

    /// Bird geometry and spawn pose
    pub const BIRD_X: f32 = 140.0;
    pub const BIRD_START_Y: f32 = 300.0;
    pub const BIRD_RADIUS: f32 = 20.0;
    /// Pipes test against a circle this much smaller than the bird
    pub const PIPE_HIT_MARGIN: f32 = 2.0;

    /// Pipe geometry and motion
    pub const PIPE_WIDTH: f32 = 88.0;
    pub const PIPE_GAP: f32 = 185.0;
    pub const PIPE_SPEED: f32 = 190.0;
    pub const PIPE_SPACING: f32 = 250.0;
    /// First pipe of a round spawns this far past the right edge
    pub const PIPE_START_OFFSET: f32 = 260.0;
    /// Pipes are recycled once fully this far past the left edge
    pub const PIPE_DESPAWN_MARGIN: f32 = 20.0;
    /// Minimum height retained by the segments above and below a gap
    pub const MIN_TOP_HEIGHT: f32 = 60.0;
    pub const MIN_BOTTOM_HEIGHT: f32 = 60.0;
    /// Legal band for a pipe's gap center
    pub const MIN_GAP_Y: f32 = MIN_TOP_HEIGHT + PIPE_GAP / 2.0;
    pub const MAX_GAP_Y: f32 = FLOOR_Y - MIN_BOTTOM_HEIGHT - PIPE_GAP / 2.0;

    /// Frame delta clamp, protects integration from large pauses
    pub const MAX_FRAME_DT: f32 = 0.04;

    /// Ready-state idle animation: bob height/rate and tilt amplitude/rate
    pub const IDLE_BOB_AMPLITUDE: f32 = 10.0;
    pub const IDLE_BOB_RATE: f32 = 1000.0 / 220.0;
    pub const IDLE_TILT_AMPLITUDE: f32 = 0.08;
    pub const IDLE_TILT_RATE: f32 = 1000.0 / 250.0;

    /// Wing-flap animation rates per phase; a flap reseeds the wing phase
    pub const WING_RATE_IDLE: f32 = 8.0;
    pub const WING_RATE_PLAYING: f32 = 16.0;
    pub const FLAP_WING_PHASE: f32 = 0.1;

    /// Tilt derived from velocity each frame
    pub const ROTATION_SCALE: f32 = 1.2;
    pub const ROTATION_MIN: f32 = -0.55;
    /// Nose-down pin, also applied on floor contact and round end
    pub const ROTATION_MAX: f32 = 1.2;

    /// Cosmetic scroll: ground tile size and cloud parallax factor
    pub const GROUND_TILE: f32 = 48.0;
    pub const CLOUD_PARALLAX: f32 = 0.15;
}
