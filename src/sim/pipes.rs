//! Obstacle stream
//!
//! Advances, scores, recycles, and spawns pipes while a round is live. The
//! queue is strictly FIFO: pipes enter at the back just past the right edge
//! and leave from the front once fully off screen, so x-positions are
//! strictly increasing in queue order.

use crate::consts::*;
use crate::persistence::BestScoreStore;

use super::state::{GamePhase, GameState};

/// Per-frame obstacle update; no-op outside of Playing.
///
/// A pipe scores the moment its trailing edge crosses behind the bird's
/// fixed x. A new best score is written through the store immediately.
pub fn update_pipes(state: &mut GameState, dt: f32, store: &mut dyn BestScoreStore) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // Advance and score in one pass; every pipe shares the one scroll speed
    let bird_x = state.bird.pos.x;
    for pipe in state.pipes.iter_mut() {
        pipe.x -= PIPE_SPEED * dt;

        if !pipe.passed && pipe.trailing_edge() < bird_x {
            pipe.passed = true;
            state.score += 1;
            if state.score > state.best {
                state.best = state.score;
                store.save(state.best);
                log::info!("new best score: {}", state.best);
            }
        }
    }

    // Recycle from the front once fully past the left edge
    while state
        .pipes
        .front()
        .is_some_and(|p| p.trailing_edge() < -PIPE_DESPAWN_MARGIN)
    {
        state.pipes.pop_front();
    }

    // Keep the spawn frontier filled out past the right edge. With an empty
    // queue the anchor sits one spacing short so the first spawn lands at
    // WORLD_WIDTH + PIPE_START_OFFSET.
    let mut frontier = state
        .pipes
        .back()
        .map_or(WORLD_WIDTH + PIPE_START_OFFSET - PIPE_SPACING, |p| p.x);
    while frontier <= WORLD_WIDTH + PIPE_START_OFFSET {
        frontier += PIPE_SPACING;
        state.spawn_pipe(frontier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::state::Pipe;
    use proptest::prelude::*;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, 0);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn pipes_score_exactly_once() {
        let mut store = MemoryStore::default();
        let mut state = playing_state(5);
        state.pipes.clear();
        state.pipes.push_back(Pipe {
            x: BIRD_X - PIPE_WIDTH + 1.0,
            gap_y: 300.0,
            passed: false,
        });

        update_pipes(&mut state, 0.016, &mut store);
        assert_eq!(state.score, 1);
        assert!(state.pipes.front().unwrap().passed);
        // Write-through: the store already holds the new best
        assert_eq!(store.best, 1);

        update_pipes(&mut state, 0.016, &mut store);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn best_score_only_persists_on_increase() {
        let mut store = MemoryStore::new(5);
        let mut state = playing_state(5);
        state.best = 5;
        state.pipes.clear();
        state.pipes.push_back(Pipe {
            x: BIRD_X - PIPE_WIDTH - 1.0,
            gap_y: 300.0,
            passed: false,
        });

        update_pipes(&mut state, 0.0, &mut store);
        assert_eq!(state.score, 1);
        assert_eq!(state.best, 5);
        assert_eq!(store.best, 5);
    }

    #[test]
    fn oldest_pipe_recycles_once_fully_off_screen() {
        let mut store = MemoryStore::default();
        let mut state = playing_state(2);
        state.pipes.clear();
        state.pipes.push_back(Pipe {
            x: -PIPE_WIDTH - PIPE_DESPAWN_MARGIN - 1.0,
            gap_y: 300.0,
            passed: true,
        });
        state.pipes.push_back(Pipe {
            x: 400.0,
            gap_y: 300.0,
            passed: true,
        });

        update_pipes(&mut state, 0.0, &mut store);
        assert_eq!(state.pipes.front().unwrap().x, 400.0);
    }

    #[test]
    fn spawning_fills_the_frontier_from_an_empty_queue() {
        let mut store = MemoryStore::default();
        let mut state = playing_state(3);
        state.pipes.clear();

        update_pipes(&mut state, 0.0, &mut store);

        let xs: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        assert_eq!(
            xs,
            vec![
                WORLD_WIDTH + PIPE_START_OFFSET,
                WORLD_WIDTH + PIPE_START_OFFSET + PIPE_SPACING,
            ]
        );
    }

    #[test]
    fn ready_and_game_over_leave_pipes_untouched() {
        let mut store = MemoryStore::default();
        let mut state = GameState::new(4, 0);
        let before: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();

        update_pipes(&mut state, 0.016, &mut store);
        let after: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        assert_eq!(before, after);

        state.phase = GamePhase::GameOver;
        update_pipes(&mut state, 0.016, &mut store);
        let after: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        assert_eq!(before, after);
    }

    proptest! {
        #[test]
        fn queue_invariants_hold_across_frames(seed in any::<u64>(), steps in 1usize..600) {
            let mut store = MemoryStore::default();
            let mut state = playing_state(seed);
            for _ in 0..steps {
                update_pipes(&mut state, 0.016, &mut store);

                let xs: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
                for pair in xs.windows(2) {
                    prop_assert!(pair[0] < pair[1]);
                    prop_assert!((pair[1] - pair[0] - PIPE_SPACING).abs() < 1e-3);
                }
                for pipe in &state.pipes {
                    prop_assert!(pipe.gap_y >= MIN_GAP_Y && pipe.gap_y <= MAX_GAP_Y);
                }
                prop_assert!(state.pipes.back().unwrap().x > WORLD_WIDTH + PIPE_START_OFFSET);
            }
        }
    }
}
