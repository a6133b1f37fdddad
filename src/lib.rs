//! # lsys-trace
//!
//! An interpretation crate that expands Lindenmayer-system grammars and
//! traces the result into engine-agnostic 2D figures.
//!
//! It decouples the *grammar* (axiom and rewrite rules) from the *picture*
//! (rasterized fractal), producing a [`Figure`] of ordered line segments that
//! can be ingested by any presentation layer: a widget canvas, an SVG writer,
//! a plotter.

pub mod definition;
pub mod figure;
pub mod grammar;
pub mod interpreter;
pub mod layout;
pub mod turtle;

pub use definition::*;
pub use figure::*;
pub use grammar::*;
pub use interpreter::*;
pub use layout::*;
pub use turtle::*;
