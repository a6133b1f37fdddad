//! Turtle state and operations for 2D tracing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Tracks the cursor position and heading during a single trace. Every trace
/// starts from a fresh state at the origin; nothing persists between renders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the cursor in figure space.
    pub position: Vec2,

    /// Heading in degrees. 0 points along +X; positive turns rotate
    /// towards +Y.
    pub heading: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    /// Unit vector along the current heading.
    pub fn direction(&self) -> Vec2 {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        Vec2::new(cos, sin)
    }

    /// Rotates the heading by `degrees`. Negative values turn the other way.
    pub fn turn(&mut self, degrees: f32) {
        self.heading += degrees;
    }

    /// Moves the cursor `distance` units along the current heading.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.direction() * distance;
    }
}

/// Operations that can be performed by the tracing turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Advance the cursor and emit a line segment (`F`, `A`, `B`).
    Draw,
    /// Advance the cursor without emitting anything (`f`).
    Move,
    /// Rotate the heading by the angle increment times the given sign
    /// (`+`/`-`).
    Turn(f32),
    /// Save (position, heading) onto the branch stack (`[`).
    Push,
    /// Restore the most recently pushed state (`]`).
    Pop,
    /// No-op — symbol has no registered meaning.
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_points_up() {
        let mut turtle = TurtleState::default();
        turtle.turn(90.0);
        turtle.advance(2.0);
        assert!(turtle.position.abs_diff_eq(Vec2::new(0.0, 2.0), 1e-5));
    }

    #[test]
    fn opposite_turns_cancel() {
        let mut turtle = TurtleState::default();
        turtle.turn(72.0);
        turtle.turn(-72.0);
        assert_eq!(turtle.heading, 0.0);
    }
}
