//! Skyflap entry point
//!
//! Runs the simulation headless with a scripted pilot as a smoke test;
//! rendering frontends drive the same `tick`/`dispatch_action_input` API
//! against their own frame clock instead.

use std::time::{SystemTime, UNIX_EPOCH};

use skyflap::consts::*;
use skyflap::persistence::{BestScoreStore, FileStore, MemoryStore};
use skyflap::sim::{GamePhase, GameState, dispatch_action_input, tick};

fn main() {
    env_logger::init();

    let mut store: Box<dyn BestScoreStore> = match FileStore::new() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("no data directory, best score will not persist: {err}");
            Box::new(MemoryStore::default())
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let best = store.load();
    let mut state = GameState::new(seed, best);

    log::info!("skyflap starting (seed {seed}, best {best})");

    // Scripted pilot: flap whenever the bird drops below the next gap center
    dispatch_action_input(&mut state);
    let dt = 1.0 / 60.0;
    for _ in 0..(60 * 120) {
        if state.phase == GamePhase::GameOver {
            break;
        }
        let target = state
            .pipes
            .iter()
            .find(|p| p.trailing_edge() >= BIRD_X)
            .map_or(BIRD_START_Y, |p| p.gap_y);
        if state.bird.pos.y > target {
            dispatch_action_input(&mut state);
        }
        tick(&mut state, dt, store.as_mut());
    }

    println!("round over: score {}, best {}", state.score, state.best);
}
