//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-time integration with a clamped maximum step
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{bird_hits_pipe, bird_passed_pipe, spans_overlap};
pub use state::{
    Bird, Difficulty, FieldGeometry, GameEvent, GamePhase, GameState, ImpactKind, Pipe, PipeField,
};
pub use tick::tick;
