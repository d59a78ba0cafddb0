//! Bird/pipe overlap predicates
//!
//! Axis-aligned tests in field coordinates: a pipe occupies its full x span
//! except for the gap between `top_height` and
//! `field_height - bottom_height`. The bird collides when the horizontal
//! spans overlap and its vertical span intrudes past either gap edge.

use super::state::{Bird, Pipe};

/// Half-open interval overlap on one axis
#[inline]
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_min < b_max && a_max > b_min
}

/// Discrete (and optionally swept) bird-vs-pipe collision test.
///
/// `prev_y` is the bird's y before this tick's integration. The plain test
/// only looks at the current position, matching the original game; it can
/// tunnel past a pipe edge when a single step moves the bird further than
/// the edge is thick. With `swept` set, the vertical test covers the whole
/// span the bird moved through this tick.
pub fn bird_hits_pipe(
    bird: &Bird,
    prev_y: f32,
    pipe: &Pipe,
    pipe_width: f32,
    field_height: f32,
    swept: bool,
) -> bool {
    if !spans_overlap(bird.pos.x, bird.pos.x + bird.size.x, pipe.x, pipe.x + pipe_width) {
        return false;
    }

    let (top, bottom) = if swept {
        (
            bird.pos.y.min(prev_y),
            (bird.pos.y + bird.size.y).max(prev_y + bird.size.y),
        )
    } else {
        (bird.pos.y, bird.pos.y + bird.size.y)
    };

    top < pipe.top_height || bottom > field_height - pipe.bottom_height
}

/// True once the pipe's right edge is fully behind the bird's left edge
#[inline]
pub fn bird_passed_pipe(bird: &Bird, pipe: &Pipe, pipe_width: f32) -> bool {
    pipe.x + pipe_width < bird.pos.x
}
