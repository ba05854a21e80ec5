//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Bounded variable timestep (the frame clock clamps spikes)
//! - Seeded RNG only
//! - FIFO obstacle queue with stable order
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod pipes;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{check_collisions, circle_rect_collide};
pub use pipes::update_pipes;
pub use state::{Bird, Camera, GamePhase, GameState, Pipe, Snapshot};
pub use tick::{dispatch_action_input, tick};
