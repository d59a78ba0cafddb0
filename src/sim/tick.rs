//! Per-tick simulation step
//!
//! One deterministic advance of the whole game given a pre-clamped time
//! delta: integrate the bird, scroll the field, run the collision/scoring
//! pass, prune dead pipes, then maybe spawn a new one.

use rand::Rng;

use super::collision::{bird_hits_pipe, bird_passed_pipe};
use super::state::{GameEvent, GamePhase, GameState, ImpactKind, Pipe};

/// Advance the game by one timestep. `dt` must be non-negative and already
/// clamped by the caller (see [`super::FrameClock`]). A no-op unless the
/// session is running, so a stray driver callback after game over cannot
/// mutate anything.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    let prev_y = state.bird.pos.y;
    if let Some(impact) = state
        .bird
        .integrate(dt, state.tuning.gravity, state.geometry.height)
    {
        state.game_over(impact);
        return;
    }

    state.field.advance(dt, state.difficulty.speed);

    // Collision and scoring share one pass in field order; a hit ends the
    // tick before any later pipe is scored.
    let mut impact = None;
    for pipe in state.field.pipes.iter_mut() {
        if bird_hits_pipe(
            &state.bird,
            prev_y,
            pipe,
            state.tuning.pipe_width,
            state.geometry.height,
            state.tuning.swept_collision,
        ) {
            impact = Some(ImpactKind::Pipe);
            break;
        }

        if !pipe.scored && bird_passed_pipe(&state.bird, pipe, state.tuning.pipe_width) {
            pipe.scored = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
            if state.difficulty.on_score(state.score, &state.tuning) {
                state.events.push(GameEvent::DifficultyRaised {
                    speed: state.difficulty.speed,
                    spawn_interval_secs: state.difficulty.spawn_interval_secs(),
                });
                log::debug!(
                    "difficulty up at score {}: speed {} px/s, spawn every {:.2}s",
                    state.score,
                    state.difficulty.speed,
                    state.difficulty.spawn_interval_secs()
                );
            }
        }
    }
    if let Some(impact) = impact {
        state.game_over(impact);
        return;
    }

    state.field.prune(state.tuning.pipe_width);
    maybe_spawn(state, dt);
}

/// Accumulate the spawn timer and emit at most one pipe per tick. The timer
/// resets fully even if several intervals elapsed, so a clamped-but-large
/// step never produces a catch-up burst.
fn maybe_spawn(state: &mut GameState, dt: f32) {
    state.field.spawn_timer += dt;
    if state.field.spawn_timer < state.difficulty.spawn_interval_secs() {
        return;
    }
    state.field.spawn_timer = 0.0;

    let geom = &state.geometry;
    let tuning = &state.tuning;
    let margin = tuning.spawn_margin;
    let max_top = geom.height - tuning.pipe_gap - margin;
    // Degenerate fields (gap plus margins taller than the play area) pin the
    // gap to the top rather than panic on an empty range
    let top_height = if max_top > margin {
        state.rng.random_range(margin..max_top)
    } else {
        margin
    };

    state.field.pipes.push(Pipe {
        x: geom.width,
        top_height,
        bottom_height: geom.height - top_height - tuning.pipe_gap,
        scored: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FieldGeometry;
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 60.0;

    fn running_state() -> GameState {
        let mut state = GameState::new(12345, FieldGeometry::new(400.0, 600.0));
        state.start();
        state
    }

    /// State with gravity off and spawning effectively disabled, for tests
    /// that steer the field by hand
    fn pinned_state() -> GameState {
        let tuning = Tuning {
            gravity: 0.0,
            spawn_frames_start: 1e9,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(12345, FieldGeometry::new(400.0, 600.0), tuning);
        state.start();
        state
    }

    fn push_pipe(state: &mut GameState, x: f32, top_height: f32) {
        let bottom_height = state.geometry.height - top_height - state.tuning.pipe_gap;
        state.field.pipes.push(Pipe {
            x,
            top_height,
            bottom_height,
            scored: false,
        });
    }

    #[test]
    fn test_free_fall_ends_in_one_ground_impact() {
        // Field 400x600, bird starts at y=150 with velocity 0, no flaps
        let mut state = running_state();
        let mut game_overs = 0;
        for _ in 0..600 {
            tick(&mut state, DT);
            game_overs += state
                .events
                .drain(..)
                .filter(|e| matches!(e, GameEvent::GameOver { impact: ImpactKind::Ground, .. }))
                .count();
        }
        assert_eq!(game_overs, 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.bird.pos.y, 600.0 - state.bird.size.y);

        // Frozen until the next start: further ticks mutate nothing
        let frozen = state.bird.pos.y;
        let pipes_before = state.field.pipes.len();
        tick(&mut state, DT);
        assert_eq!(state.bird.pos.y, frozen);
        assert_eq!(state.field.pipes.len(), pipes_before);
        assert!(state.events.is_empty());

        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.bird.pos.y, 150.0);
    }

    #[test]
    fn test_pipe_removed_after_crossing_field() {
        // Pipe at x=400, width 50, speed 120 px/s: gone after
        // (400 + 50) / 120 = 3.75s, i.e. tick 225 at 60 Hz
        let mut state = pinned_state();
        push_pipe(&mut state, 400.0, 100.0); // gap 100..250 covers the bird
        for _ in 0..224 {
            tick(&mut state, DT);
        }
        assert_eq!(state.field.pipes.len(), 1);
        tick(&mut state, DT);
        assert!(state.field.pipes.is_empty());
    }

    #[test]
    fn test_pipe_scored_exactly_once() {
        let mut state = pinned_state();
        // Right edge at 95, already behind the bird's left edge at 100
        push_pipe(&mut state, 45.0, 100.0);
        tick(&mut state, DT);
        assert_eq!(state.score, 1);
        assert!(state.field.pipes[0].scored);
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::Scored { score: 1 }]
        ));
        state.events.clear();

        for _ in 0..10 {
            tick(&mut state, DT);
        }
        assert_eq!(state.score, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_fifth_score_raises_difficulty() {
        let mut state = pinned_state();
        for i in 0..5 {
            push_pipe(&mut state, 40.0 - i as f32 * 55.0, 100.0);
        }
        let start_speed = state.difficulty.speed;
        tick(&mut state, DT);

        assert_eq!(state.score, 5);
        assert_eq!(state.difficulty.speed, start_speed + state.tuning.speed_increment);
        assert_eq!(
            state.difficulty.spawn_frames,
            state.tuning.spawn_frames_start - state.tuning.spawn_frames_decrement
        );
        let raises = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::DifficultyRaised { .. }))
            .count();
        assert_eq!(raises, 1);
    }

    #[test]
    fn test_collision_short_circuits_scoring() {
        let mut state = pinned_state();
        // First pipe in field order overlaps the bird's top half...
        push_pipe(&mut state, 90.0, 200.0); // gap 200..350, bird at 150..180
        // ...second pipe is already passed and would otherwise score
        push_pipe(&mut state, 40.0, 100.0);
        tick(&mut state, DT);

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(!state.field.pipes[1].scored);
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::GameOver { impact: ImpactKind::Pipe, score: 0 }]
        ));
    }

    #[test]
    fn test_single_spawn_per_tick_no_catchup() {
        let mut state = running_state();
        // Ten intervals worth of accumulated time still yields one pipe
        state.field.spawn_timer = 10.0 * state.difficulty.spawn_interval_secs();
        tick(&mut state, DT);
        assert_eq!(state.field.pipes.len(), 1);
        assert_eq!(state.field.spawn_timer, 0.0);
    }

    #[test]
    fn test_spawned_pipes_respect_margins() {
        let mut state = pinned_state();
        let geometry = state.geometry;
        let tuning = state.tuning.clone();
        for _ in 0..20 {
            state.field.spawn_timer = f32::INFINITY;
            tick(&mut state, DT);
        }
        assert_eq!(state.field.pipes.len(), 20);
        for pipe in &state.field.pipes {
            assert!(pipe.top_height >= tuning.spawn_margin);
            assert!(pipe.top_height <= geometry.height - tuning.pipe_gap - tuning.spawn_margin);
            let gap = geometry.height - pipe.top_height - pipe.bottom_height;
            assert!((gap - tuning.pipe_gap).abs() < 1e-3);
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = pinned_state();
        let mut b = pinned_state();
        for _ in 0..8 {
            a.field.spawn_timer = f32::INFINITY;
            b.field.spawn_timer = f32::INFINITY;
            tick(&mut a, DT);
            tick(&mut b, DT);
        }
        let heights_a: Vec<f32> = a.field.pipes.iter().map(|p| p.top_height).collect();
        let heights_b: Vec<f32> = b.field.pipes.iter().map(|p| p.top_height).collect();
        assert_eq!(heights_a, heights_b);
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut state = GameState::new(1, FieldGeometry::new(400.0, 600.0));
        assert_eq!(state.phase, GamePhase::Idle);
        let bird_y = state.bird.pos.y;
        tick(&mut state, DT);
        assert_eq!(state.bird.pos.y, bird_y);
        assert!(state.field.pipes.is_empty());
        assert!(state.events.is_empty());
    }
}
