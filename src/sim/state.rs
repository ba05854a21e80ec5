//! Game state and core simulation types
//!
//! Everything the simulation mutates lives on one owned aggregate; frontends
//! hold a [`GameState`] and drive it through the functions in
//! [`tick`](super::tick).

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input, bird bobbing in place
    Ready,
    /// Active gameplay
    Playing,
    /// Round ended, waiting for the reset input
    GameOver,
}

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Position; x stays fixed during play, y is simulated
    pub pos: Vec2,
    /// Vertical velocity (positive is downward)
    pub vy: f32,
    /// Tilt angle in radians, derived from velocity while airborne
    pub rotation: f32,
    /// Wing-flap animation phase accumulator
    pub wing_phase: f32,
    /// Collision radius
    pub radius: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_START_Y),
            vy: 0.0,
            rotation: 0.0,
            wing_phase: 0.0,
            radius: BIRD_RADIUS,
        }
    }
}

/// A pipe pair: two segments of fixed width around a gap centered at `gap_y`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pipe {
    /// X of the leading (left) edge; decreases over time
    pub x: f32,
    /// Vertical center of the gap, fixed at spawn
    pub gap_y: f32,
    /// Whether this pipe has already been credited to the score
    pub passed: bool,
}

impl Pipe {
    /// X of the trailing (right) edge
    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Bottom of the segment hanging from the ceiling
    pub fn top_height(&self) -> f32 {
        self.gap_y - PIPE_GAP / 2.0
    }

    /// Top of the segment standing on the floor
    pub fn bottom_y(&self) -> f32 {
        self.gap_y + PIPE_GAP / 2.0
    }
}

/// Cosmetic scroll accumulators
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    /// Ground scroll phase, wraps at the tile size
    pub ground_offset: f32,
    /// Cloud scroll phase, wraps at the world width
    pub cloud_offset: f32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    pub bird: Bird,
    /// Live pipes, oldest (leftmost) at the front
    pub pipes: VecDeque<Pipe>,
    pub camera: Camera,
    /// Score for the current round
    pub score: u32,
    /// Best score; loaded at startup, written through a store on increase
    pub best: u32,
    /// Accumulated wall time, drives the Ready idle animation
    pub elapsed: f32,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given seed and previously persisted best
    pub fn new(seed: u64, best: u32) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Ready,
            bird: Bird::default(),
            pipes: VecDeque::new(),
            camera: Camera::default(),
            score: 0,
            best,
            elapsed: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.seed_pipes();
        state
    }

    /// Append a pipe at `x` with a freshly drawn gap center
    pub(crate) fn spawn_pipe(&mut self, x: f32) {
        let gap_y = self.rng.random_range(MIN_GAP_Y..=MAX_GAP_Y);
        self.pipes.push_back(Pipe {
            x,
            gap_y,
            passed: false,
        });
    }

    /// Clear the queue and pre-populate three evenly spaced pipes starting
    /// just past the right edge
    fn seed_pipes(&mut self) {
        self.pipes.clear();
        for i in 0..3 {
            self.spawn_pipe(WORLD_WIDTH + PIPE_START_OFFSET + i as f32 * PIPE_SPACING);
        }
    }

    /// Reset to Ready for a fresh round; the best score carries over
    pub fn reset_round(&mut self) {
        self.phase = GamePhase::Ready;
        self.bird = Bird::default();
        self.score = 0;
        self.seed_pipes();
    }

    /// Read-only view for render collaborators
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            bird: &self.bird,
            pipes: &self.pipes,
            camera: self.camera,
            score: self.score,
            best: self.best,
        }
    }
}

/// Per-frame read of everything a renderer needs
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub bird: &'a Bird,
    pub pipes: &'a VecDeque<Pipe>,
    pub camera: Camera,
    pub score: u32,
    pub best: u32,
}
