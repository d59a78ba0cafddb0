//! Gapwing entry point
//!
//! Headless demo driver: runs one autopiloted session on a synthetic 60 Hz
//! clock and logs what a real render/audio driver would react to. Usage:
//!
//! ```text
//! gapwing [seed]
//! ```

use gapwing::consts::{FIELD_HEIGHT, FIELD_WIDTH, REFERENCE_RATE};
use gapwing::sim::{FieldGeometry, GameEvent, GameState};
use gapwing::Session;

/// Two simulated minutes at 60 Hz
const MAX_FRAMES: u32 = 2 * 60 * 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xF1A9);

    let mut session = Session::new(seed, FieldGeometry::new(FIELD_WIDTH, FIELD_HEIGHT));
    session.start();

    let frame_secs = 1.0 / REFERENCE_RATE as f64;
    let mut now = 0.0;
    for _ in 0..MAX_FRAMES {
        if autopilot_wants_flap(session.state()) {
            session.flap();
        }
        session.frame(now);
        for event in session.drain_events() {
            match event {
                GameEvent::Scored { score } => log::info!("score: {score}"),
                GameEvent::DifficultyRaised {
                    speed,
                    spawn_interval_secs,
                } => log::info!(
                    "difficulty up: {speed} px/s, pipe every {spawn_interval_secs:.2}s"
                ),
                GameEvent::GameOver { impact, score } => {
                    log::info!("game over ({impact:?}) with score {score}")
                }
            }
        }
        if !session.is_running() {
            break;
        }
        now += frame_secs;
    }

    println!("final score: {}", session.state().score);
}

/// Flap whenever the bird is falling below the center of the next gap (or
/// the field center when no pipe is ahead). Crude, but survives long enough
/// to exercise scoring and difficulty steps.
fn autopilot_wants_flap(state: &GameState) -> bool {
    let bird = &state.bird;
    let target = state
        .field
        .pipes
        .iter()
        .filter(|pipe| pipe.x + state.tuning.pipe_width >= bird.pos.x)
        .map(|pipe| {
            let gap_top = pipe.top_height;
            let gap_bottom = state.geometry.height - pipe.bottom_height;
            (gap_top + gap_bottom) / 2.0
        })
        .next()
        .unwrap_or(state.geometry.height / 2.0);

    bird.velocity > 0.0 && bird.pos.y + bird.size.y > target
}
