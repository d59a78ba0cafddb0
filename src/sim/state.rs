//! Game state and core simulation types
//!
//! Everything a run needs to be replayed deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen up, no simulation ticking
    Idle,
    /// Active gameplay
    Running,
}

/// What the bird hit to end the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    /// Bottom field boundary
    Ground,
    /// A pipe edge
    Pipe,
}

/// One-tick notifications for the driver (audio cue, HUD update, screens)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A pipe was passed; carries the new total
    Scored { score: u32 },
    /// Score milestone raised the difficulty
    DifficultyRaised { speed: f32, spawn_interval_secs: f32 },
    /// Terminal signal; the session is back in [`GamePhase::Idle`]
    GameOver { impact: ImpactKind, score: u32 },
}

/// Play area dimensions, supplied by the driver at start and on resize
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    pub width: f32,
    pub height: f32,
}

impl FieldGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; x stays fixed for the whole run
    pub pos: Vec2,
    /// Bounding box (width, height)
    pub size: Vec2,
    /// Vertical velocity (px/s, positive = down)
    pub velocity: f32,
}

impl Bird {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            velocity: 0.0,
        }
    }

    /// Integrate gravity over one timestep and clamp to the field.
    ///
    /// The ceiling clamp stops the bird (velocity zeroed, not bounced) and is
    /// non-terminal. The floor clamp stops it the same way and reports the
    /// ground impact for the orchestrator to consume.
    pub fn integrate(&mut self, dt: f32, gravity: f32, field_height: f32) -> Option<ImpactKind> {
        self.velocity += gravity * dt;
        self.pos.y += self.velocity * dt;

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.velocity = 0.0;
        }

        if self.pos.y + self.size.y > field_height {
            self.pos.y = field_height - self.size.y;
            self.velocity = 0.0;
            return Some(ImpactKind::Ground);
        }

        None
    }

    /// Instantaneous upward impulse. Assignment, not addition: repeated
    /// flaps in one tick do not stack.
    pub fn flap(&mut self, impulse: f32) {
        self.velocity = impulse;
    }
}

/// A gap obstacle: two pipe halves sharing one x span
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Height of the top half, from the ceiling down
    pub top_height: f32,
    /// Height of the bottom half, from the ground up
    pub bottom_height: f32,
    /// Set once when the bird clears this pipe
    pub scored: bool,
}

/// Ordered pipe sequence plus the spawn timer
///
/// Insertion order is spawn order, so x is descending front-to-back; updates
/// are per-element and never depend on explicit sorting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipeField {
    pub pipes: Vec<Pipe>,
    /// Seconds accumulated since the last spawn
    pub spawn_timer: f32,
}

impl PipeField {
    /// Scroll every pipe left by `speed * dt`
    pub fn advance(&mut self, dt: f32, speed: f32) {
        for pipe in &mut self.pipes {
            pipe.x -= speed * dt;
        }
    }

    /// Drop pipes whose right edge has left the field, preserving order
    pub fn prune(&mut self, pipe_width: f32) {
        self.pipes.retain(|pipe| pipe.x + pipe_width > 0.0);
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
        self.spawn_timer = 0.0;
    }
}

/// Score-driven speed and spawn cadence
///
/// A pure step function of the score: speed never decreases and the spawn
/// interval has a hard floor. The cadence is kept in frame-equivalents so the
/// tuning constants stay dimensionally consistent with the original
/// frame-counted balance; only `spawn_interval_secs` feeds scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Horizontal scroll speed (px/s)
    pub speed: f32,
    /// Spawn cadence in frame-equivalents
    pub spawn_frames: f32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            speed: tuning.start_speed,
            spawn_frames: tuning.spawn_frames_start,
        }
    }

    /// Seconds between spawns at the current difficulty
    pub fn spawn_interval_secs(&self) -> f32 {
        self.spawn_frames / crate::consts::REFERENCE_RATE
    }

    /// Apply one scoring event. Returns true if the milestone was hit and
    /// the difficulty changed.
    pub fn on_score(&mut self, score: u32, tuning: &Tuning) -> bool {
        if !score.is_multiple_of(tuning.score_step) {
            return false;
        }
        self.speed += tuning.speed_increment;
        if self.spawn_frames > tuning.spawn_frames_floor {
            self.spawn_frames -= tuning.spawn_frames_decrement;
        }
        true
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn-height RNG; advances across the session, never mid-run reseeded
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub bird: Bird,
    pub field: PipeField,
    pub difficulty: Difficulty,
    pub geometry: FieldGeometry,
    pub tuning: Tuning,
    /// Per-tick notifications, drained by the driver each frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session with default tuning
    pub fn new(seed: u64, geometry: FieldGeometry) -> Self {
        Self::with_tuning(seed, geometry, Tuning::default())
    }

    pub fn with_tuning(seed: u64, geometry: FieldGeometry, tuning: Tuning) -> Self {
        let bird = Self::spawn_bird(&geometry, &tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            bird,
            field: PipeField::default(),
            difficulty: Difficulty::new(&tuning),
            geometry,
            tuning,
            events: Vec::new(),
        }
    }

    fn spawn_bird(geometry: &FieldGeometry, tuning: &Tuning) -> Bird {
        Bird::new(
            Vec2::new(geometry.width / 4.0, geometry.height / 4.0),
            Vec2::new(tuning.bird_width, tuning.bird_height),
        )
    }

    /// Begin (or restart) a run: bird back at its spawn point, field empty,
    /// score and difficulty at their initial constants. Idempotent; this is
    /// the only place score and speed ever reset.
    pub fn start(&mut self) {
        self.bird = Self::spawn_bird(&self.geometry, &self.tuning);
        self.field.clear();
        self.score = 0;
        self.difficulty = Difficulty::new(&self.tuning);
        self.events.clear();
        self.phase = GamePhase::Running;
    }

    /// Terminal transition: back to idle, state frozen until the next start
    pub fn game_over(&mut self, impact: ImpactKind) {
        self.phase = GamePhase::Idle;
        self.events.push(GameEvent::GameOver {
            impact,
            score: self.score,
        });
        log::debug!("game over: {impact:?}, score {}", self.score);
    }

    /// Flap input; ignored unless running so a stray event on the start
    /// screen cannot corrupt state
    pub fn flap(&mut self) {
        if self.phase == GamePhase::Running {
            self.bird.flap(self.tuning.flap_impulse);
        }
    }

    /// Update the play area (driver resize). Positions are left as-is; the
    /// next start re-derives the bird spawn point from the new geometry.
    pub fn resize(&mut self, geometry: FieldGeometry) {
        self.geometry = geometry;
    }
}
