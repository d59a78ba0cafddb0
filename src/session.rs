//! Driver-facing session facade
//!
//! A [`Session`] owns one game's state plus the frame clock and exposes the
//! three calls a driver loop needs: `start`, `flap`, and a once-per-refresh
//! `frame(now)`. Rendering reads state snapshots after `frame` returns;
//! audio and HUD react to drained [`GameEvent`]s. The core never blocks on
//! any of those collaborators.

use crate::sim::{tick, FieldGeometry, FrameClock, GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// One independent game session: state, clock, and event buffer
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    clock: FrameClock,
}

impl Session {
    /// Create an idle session with default tuning
    pub fn new(seed: u64, geometry: FieldGeometry) -> Self {
        Self::with_tuning(seed, geometry, Tuning::default())
    }

    pub fn with_tuning(seed: u64, geometry: FieldGeometry, tuning: Tuning) -> Self {
        let dt_max = tuning.dt_max;
        Self {
            state: GameState::with_tuning(seed, geometry, tuning),
            clock: FrameClock::new(dt_max),
        }
    }

    /// Begin or restart a run. Idempotent: calling it mid-run just resets.
    /// The clock baseline is dropped so the first frame after this call
    /// records time and advances nothing.
    pub fn start(&mut self) {
        self.state.start();
        self.clock.reset();
        log::info!("session start (seed {})", self.state.seed);
    }

    /// Advance the simulation for one display refresh. `now_secs` is the
    /// driver's monotonic timestamp; the step is clamped before integration.
    /// No-op while idle.
    pub fn frame(&mut self, now_secs: f64) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        if let Some(dt) = self.clock.sample(now_secs) {
            tick(&mut self.state, dt);
        }
    }

    /// Flap input; ignored while idle
    pub fn flap(&mut self) {
        self.state.flap();
    }

    /// Driver resize; takes effect immediately for boundaries and spawns
    pub fn resize(&mut self, geometry: FieldGeometry) {
        log::debug!("field resized to {}x{}", geometry.width, geometry.height);
        self.state.resize(geometry);
    }

    /// Read-only snapshot for the render sink
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    /// Take this frame's notifications (score cues, game over). Events from
    /// a frame the driver never drains simply accumulate until the next
    /// drain; nothing in the core waits on the sink.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
