//! Gapwing - a time-based flappy-style arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Driver-facing facade (real-time clock + lifecycle + events)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input devices, and audio are external collaborators: a driver
//! calls [`Session::frame`] once per display refresh, forwards discrete
//! flap/start events, and reads back state snapshots and [`sim::GameEvent`]s
//! to draw and play sounds.

pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
///
/// The original tuning was per-frame at an assumed 60 FPS; speeds and
/// accelerations here are those frame-counted values multiplied out to
/// physical units per second via `REFERENCE_RATE`, so the feel is unchanged
/// while the simulation runs on real delta time.
pub mod consts {
    /// Frames-per-second-equivalent used to normalize frame-counted tuning
    /// constants. Has no effect on scheduling.
    pub const REFERENCE_RATE: f32 = 60.0;
    /// Maximum timestep fed into one tick. Uncapped dt after a backgrounded
    /// tab would let the bird tunnel through pipes or the ground.
    pub const DT_MAX: f32 = 1.0 / 30.0;

    /// Field dimensions used by the demo driver (real drivers pass their own)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Bird dimensions
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;
    /// Downward acceleration (px/s²), originally 0.6 px/frame²
    pub const GRAVITY: f32 = 0.6 * REFERENCE_RATE * REFERENCE_RATE;
    /// Velocity assigned on flap (px/s, negative = up), originally -10 px/frame
    pub const FLAP_IMPULSE: f32 = -10.0 * REFERENCE_RATE;

    /// Pipe dimensions
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Minimum clearance between a gap edge and the field boundary
    pub const SPAWN_MARGIN: f32 = 25.0;

    /// Initial horizontal scroll speed (px/s), originally 2 px/frame
    pub const START_SPEED: f32 = 2.0 * REFERENCE_RATE;
    /// Speed added at each difficulty step (px/s)
    pub const SPEED_INCREMENT: f32 = 0.2 * REFERENCE_RATE;
    /// Difficulty steps up every this many points
    pub const SCORE_STEP: u32 = 5;

    /// Initial spawn cadence in frame-equivalents (100 frames at 60 FPS)
    pub const SPAWN_FRAMES_START: f32 = 100.0;
    /// Spawn cadence never drops below this many frame-equivalents
    pub const SPAWN_FRAMES_FLOOR: f32 = 60.0;
    /// Frame-equivalents removed from the cadence at each difficulty step
    pub const SPAWN_FRAMES_DECREMENT: f32 = 5.0;
}
