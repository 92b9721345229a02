// File: crates/tufte-core/src/axis.rs
// Summary: Value-space ranges per dimension and the bar/line range calculators.

use tracing::debug;

use crate::data::DataPoint;
use crate::error::{ChartError, Result};

/// Fraction of the value range added above and below a line chart.
pub const LINE_PADDING: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    /// Pixel extent of the surface along this axis; zero until bound to a surface.
    pub pixel_length: f64,
}

impl Axis {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max, pixel_length: 0.0 }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn is_degenerate(&self) -> bool { self.max == self.min }
}

/// Index axis (x) and value axis (y) for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
}

impl Axes {
    pub fn with_pixel_lengths(mut self, width: f64, height: f64) -> Self {
        self.x.pixel_length = width;
        self.y.pixel_length = height;
        self
    }
}

/// `x = [0, N]`, `y = [0, max stack sum]`.
///
/// Points whose layers do not coerce to numbers are skipped here; the
/// traversal reports them when it reaches them.
pub fn bar_axes(data: &[DataPoint]) -> Result<Axes> {
    let x = Axis::new(0.0, data.len() as f64);
    let mut y = Axis::new(0.0, 0.0);

    for (index, point) in data.iter().enumerate() {
        let Ok(sum) = point.total(index) else { continue };
        if sum < y.min {
            return Err(ChartError::NegativeValue { index, sum });
        }
        if sum > y.max {
            y.max = sum;
        }
    }

    if x.max <= 0.0 {
        return Err(ChartError::EmptyDataset);
    }
    if y.max <= 0.0 {
        return Err(ChartError::NoPositiveValue { max: y.max });
    }

    debug!(points = data.len(), y_max = y.max, "bar axes");
    Ok(Axes { x, y })
}

/// `x = [0, N]`, `y = [lo - 0.4 r, hi + 0.4 r]` over every individual layer value.
pub fn line_axes(data: &[DataPoint]) -> Result<Axes> {
    let x = Axis::new(0.0, data.len() as f64);
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;

    for (index, point) in data.iter().enumerate() {
        let Ok(values) = point.values(index) else { continue };
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }

    if x.max <= 0.0 {
        return Err(ChartError::EmptyDataset);
    }

    // Nothing coerced: collapse to a degenerate axis instead of infinities.
    if lo > hi {
        lo = 0.0;
        hi = 0.0;
    }

    let range = hi - lo;
    let y = Axis::new(lo - range * LINE_PADDING, hi + range * LINE_PADDING);
    debug!(points = data.len(), y_min = y.min, y_max = y.max, "line axes");
    Ok(Axes { x, y })
}
