// File: crates/tufte-core/src/pipeline.rs
// Summary: The one traversal shared by every chart type, driving a ChartStrategy over the dataset.

use tracing::{debug, warn};

use crate::axis::Axes;
use crate::data::DataPoint;
use crate::error::{ChartError, Result};
use crate::option::Resolver;
use crate::options::ChartOptions;
use crate::scale::Transform;
use crate::surface::Surface;

/// Scoped to a single render call; handed to strategies and lifecycle hooks.
pub struct RenderContext<'a> {
    pub axes: &'a Axes,
    pub transform: &'a Transform,
    pub surface: &'a mut dyn Surface,
    pub options: &'a ChartOptions,
}

/// Chart-type specific drawing. The traversal calls `draw_point` for every
/// stack layer, `draw_stack` after the last layer of each point, and
/// `draw_graph` once at the end.
pub trait ChartStrategy {
    fn name(&self) -> &'static str;

    fn compute_axes(&self, data: &[DataPoint]) -> Result<Axes>;

    /// `x` is the slot centre (`index + 0.5`), `y` the layer value.
    fn draw_point(
        &mut self,
        ctx: &mut RenderContext<'_>,
        resolver: &Resolver<'_>,
        stacked_index: usize,
        x: f64,
        y: f64,
    );

    fn draw_stack(
        &mut self,
        ctx: &mut RenderContext<'_>,
        index: usize,
        all_y: &[f64],
        point: &DataPoint,
        x: f64,
    );

    fn draw_graph(&mut self, ctx: &mut RenderContext<'_>);
}

/// Render `options.data` onto `surface` with `strategy`.
///
/// Errors abort immediately; whatever was drawn before the failing point
/// stays on the surface.
pub fn render<S>(surface: &mut dyn Surface, options: &ChartOptions, strategy: &mut S) -> Result<Axes>
where
    S: ChartStrategy + ?Sized,
{
    let (width, height) = (surface.width(), surface.height());
    if !(width > 0.0 && height > 0.0) {
        warn!(width, height, "invalid plot dimensions");
        return Err(ChartError::InvalidDimension { width, height });
    }

    let axes = strategy
        .compute_axes(&options.data)
        .inspect_err(|e| warn!(chart = strategy.name(), error = %e, "axis computation failed"))?
        .with_pixel_lengths(width, height);
    let transform = Transform::new(&axes);
    debug!(chart = strategy.name(), ?axes, "rendering");

    let mut ctx = RenderContext { axes: &axes, transform: &transform, surface, options };

    for (index, point) in options.data.iter().enumerate() {
        let x = index as f64 + 0.5;
        let all_y = point
            .values(index)
            .inspect_err(|e| warn!(chart = strategy.name(), error = %e, "aborting render"))?;

        for (stacked_index, &y) in all_y.iter().enumerate() {
            let resolver = Resolver::new(point, index, Some(stacked_index), options);
            strategy.draw_point(&mut ctx, &resolver, stacked_index, x, y);
            if let Some(hook) = &options.after_draw.point {
                hook(&mut ctx, index, stacked_index);
            }
        }

        strategy.draw_stack(&mut ctx, index, &all_y, point, x);
        if let Some(hook) = &options.after_draw.stack {
            hook(&mut ctx, index);
        }
    }

    strategy.draw_graph(&mut ctx);
    if let Some(hook) = &options.after_draw.graph {
        hook(&mut ctx);
    }

    Ok(axes)
}
