//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`], so a
//! driver can load alternate balance from JSON without recompiling. Defaults
//! reproduce the original frame-counted feel (see `consts`).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance knobs, serializable for external overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration on the bird (px/s²)
    pub gravity: f32,
    /// Velocity assigned on flap (px/s, negative = up)
    pub flap_impulse: f32,
    /// Bird bounding box (px)
    pub bird_width: f32,
    pub bird_height: f32,
    /// Pipe bounding width (px)
    pub pipe_width: f32,
    /// Vertical opening between pipe halves (px)
    pub pipe_gap: f32,
    /// Minimum clearance between a gap edge and the field boundary (px)
    pub spawn_margin: f32,
    /// Initial horizontal scroll speed (px/s)
    pub start_speed: f32,
    /// Speed added at each difficulty step (px/s)
    pub speed_increment: f32,
    /// Difficulty steps up every this many points
    pub score_step: u32,
    /// Initial spawn cadence in frame-equivalents
    pub spawn_frames_start: f32,
    /// Spawn cadence floor in frame-equivalents
    pub spawn_frames_floor: f32,
    /// Frame-equivalents removed per difficulty step
    pub spawn_frames_decrement: f32,
    /// Maximum timestep fed into one tick (s)
    pub dt_max: f32,
    /// Widen the collision test to the vertical span the bird swept this
    /// tick. The original discrete test can tunnel through a pipe edge at
    /// high fall speed; off by default to preserve original behavior.
    pub swept_collision: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            spawn_margin: SPAWN_MARGIN,
            start_speed: START_SPEED,
            speed_increment: SPEED_INCREMENT,
            score_step: SCORE_STEP,
            spawn_frames_start: SPAWN_FRAMES_START,
            spawn_frames_floor: SPAWN_FRAMES_FLOOR,
            spawn_frames_decrement: SPAWN_FRAMES_DECREMENT,
            dt_max: DT_MAX,
            swept_collision: false,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the full tuning table (for dumping the effective balance)
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
