//! Interpreter that traces an L-System symbol sequence into a [`Figure`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TraceConfig`], register symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::trace`] with an expanded sequence.

use crate::figure::{Figure, LineSegment};
use crate::turtle::{TurtleOp, TurtleState};
use std::collections::HashMap;

/// Configuration for sequence tracing.
#[derive(Clone, Debug)]
pub struct TraceConfig {
    /// Maximum stack depth for push/pop operations.
    pub max_stack_depth: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_stack_depth: 1024,
        }
    }
}

/// Interprets L-System output to build a figure of line segments.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TraceConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty
    /// symbol map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) before
    /// calling [`trace`](Self::trace).
    pub fn new(config: TraceConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional symbol-to-operation mappings.
    ///
    /// `F`, `A` and `B` draw forward, `f` moves without drawing, `+` and `-`
    /// turn by one angle increment, `[` and `]` push and pop the branch
    /// stack. See the crate README for the full symbol table.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            // Drawing
            ('F', TurtleOp::Draw),
            ('A', TurtleOp::Draw),
            ('B', TurtleOp::Draw),
            ('f', TurtleOp::Move),
            // Turning
            ('+', TurtleOp::Turn(1.0)),
            ('-', TurtleOp::Turn(-1.0)),
            // Flow
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];

        for (sym, op) in mappings {
            self.set_op(sym, op);
        }
    }

    /// Traces the full `sequence` and returns the resulting [`Figure`].
    ///
    /// Walks every symbol in order, dispatching each to its registered
    /// [`TurtleOp`]. The turtle starts at the origin heading along +X.
    /// Symbols with no registered mapping are silently ignored, so grammars
    /// may carry auxiliary non-drawing symbols.
    ///
    /// `step_length` is the distance covered by one draw/move and
    /// `angle_increment` (degrees) the rotation of one turn. Both are
    /// per-call parameters so the caller can shrink the step for deeper
    /// generations without touching the interpreter.
    ///
    /// # Push / Pop
    ///
    /// `[` saves the turtle state (position, heading) onto a stack and `]`
    /// restores it, enabling branching figures. Pushes beyond
    /// `max_stack_depth` are silently dropped, and popping an empty stack is
    /// a no-op, so a malformed definition degrades instead of failing.
    ///
    /// Positions accumulate in floating point for the whole walk; rounding
    /// happens only when the caller asks the figure for pixel segments.
    pub fn trace(&self, sequence: &str, step_length: f32, angle_increment: f32) -> Figure {
        let mut figure = Figure::default();
        let mut turtle = TurtleState::default();
        let mut stack: Vec<TurtleState> = Vec::new();

        for sym in sequence.chars() {
            let op = self.op_map.get(&sym).copied().unwrap_or(TurtleOp::Ignore);

            match op {
                TurtleOp::Draw => {
                    let start = turtle.position;
                    turtle.advance(step_length);
                    figure.add_segment(LineSegment {
                        start,
                        end: turtle.position,
                    });
                }
                TurtleOp::Move => turtle.advance(step_length),
                TurtleOp::Turn(sign) => turtle.turn(angle_increment * sign),
                TurtleOp::Push => {
                    if stack.len() < self.config.max_stack_depth {
                        stack.push(turtle);
                    }
                }
                TurtleOp::Pop => match stack.pop() {
                    Some(saved) => turtle = saved,
                    None => tracing::debug!("pop on empty branch stack"),
                },
                TurtleOp::Ignore => {}
            }
        }

        figure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn pushes_beyond_stack_depth_are_dropped() {
        let mut shallow = TurtleInterpreter::new(TraceConfig { max_stack_depth: 0 });
        shallow.populate_standard_symbols();

        // With a zero-depth stack the brackets are inert, so the second F
        // continues from the end of the first.
        let figure = shallow.trace("[F]F", 1.0, 90.0);
        assert_eq!(figure.len(), 2);
        assert!(figure.segments[1].start.abs_diff_eq(Vec2::new(1.0, 0.0), 1e-5));
    }
}
