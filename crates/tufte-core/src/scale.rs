// File: crates/tufte-core/src/scale.rs
// Summary: Value-space to pixel-space transforms built from an axis pair.

use tracing::debug;

use crate::axis::{Axes, Axis};

/// Linear map from `[axis.min, axis.max]` onto `[0, axis.pixel_length]`.
///
/// A degenerate axis (`max == min`) sends every value to the middle pixel
/// and every delta to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    min: f64,
    factor: f64,
    pixel_length: f64,
    degenerate: bool,
}

impl LinearScale {
    pub fn new(axis: &Axis) -> Self {
        let degenerate = axis.is_degenerate();
        let factor = if degenerate { 0.0 } else { axis.pixel_length / axis.span() };
        Self { min: axis.min, factor, pixel_length: axis.pixel_length, degenerate }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        if self.degenerate {
            self.pixel_length * 0.5
        } else {
            (v - self.min) * self.factor
        }
    }

    /// Pixel length of a value-space distance.
    #[inline]
    pub fn delta(&self, d: f64) -> f64 { d * self.factor }

    pub fn pixel_length(&self) -> f64 { self.pixel_length }
}

/// X grows rightward in both spaces; Y is flipped because pixel rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl Transform {
    pub fn new(axes: &Axes) -> Self {
        if axes.x.is_degenerate() || axes.y.is_degenerate() {
            debug!(?axes, "degenerate axis, mapping to mid-pixel");
        }
        Self { x_scale: LinearScale::new(&axes.x), y_scale: LinearScale::new(&axes.y) }
    }

    #[inline]
    pub fn x(&self, v: f64) -> f64 { self.x_scale.apply(v) }

    #[inline]
    pub fn y(&self, v: f64) -> f64 { self.y_scale.pixel_length - self.y_scale.apply(v) }

    #[inline]
    pub fn w(&self, dx: f64) -> f64 { self.x_scale.delta(dx) }

    #[inline]
    pub fn h(&self, dy: f64) -> f64 { self.y_scale.delta(dy) }
}
