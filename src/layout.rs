//! Canvas-side policy: how deep to expand and how long a step to draw.
//!
//! The interpreter takes step length and angle increment as plain
//! parameters; these helpers hold the policy a presentation layer feeds it
//! with, keeping the expander and renderer free of any UI concern.

use crate::figure::Figure;
use glam::Vec2;

/// Visual scaling policy mapping a generation count to a step length.
///
/// Deeper expansions produce exponentially more segments, so they are drawn
/// with a shorter step to stay on screen.
#[derive(Clone, Debug)]
pub struct ScalePolicy {
    /// Highest generation a range input should offer.
    pub max_steps: u8,
    /// Step length for shallow expansions.
    pub coarse_step: f32,
    /// Step length once the sequence gets dense.
    pub fine_step: f32,
    /// First generation drawn with the fine step.
    pub fine_after: u8,
}

impl Default for ScalePolicy {
    fn default() -> Self {
        Self {
            max_steps: 5,
            coarse_step: 5.0,
            fine_step: 2.0,
            fine_after: 4,
        }
    }
}

impl ScalePolicy {
    /// Step length to trace `generation` with.
    pub fn step_length(&self, generation: u8) -> f32 {
        if generation < self.fine_after {
            self.coarse_step
        } else {
            self.fine_step
        }
    }

    /// Clamps a raw range-input value into `0..=max_steps`.
    pub fn clamp_steps(&self, requested: u8) -> u8 {
        requested.min(self.max_steps)
    }
}

/// Pixel dimensions of the drawable canvas, as reported by the presentation
/// layer.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas center, where the trace origin is placed.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Uniform scale factor that fits `figure` inside the viewport while
    /// preserving its aspect ratio.
    ///
    /// A figure with no extent (empty, or a single point) maps to 1.0.
    pub fn fit_scale(&self, figure: &Figure) -> f32 {
        let Some((min, max)) = figure.bounds() else {
            return 1.0;
        };
        let extent = max - min;
        let sx = if extent.x > 0.0 {
            self.width as f32 / extent.x
        } else {
            f32::INFINITY
        };
        let sy = if extent.y > 0.0 {
            self.height as f32 / extent.y
        } else {
            f32::INFINITY
        };
        let scale = sx.min(sy);
        if scale.is_finite() { scale } else { 1.0 }
    }
}
