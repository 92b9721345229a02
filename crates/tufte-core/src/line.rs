// File: crates/tufte-core/src/line.rs
// Summary: Line strategy: one polyline per stack layer, run from the left edge to the right edge.

use crate::axis::{line_axes, Axes};
use crate::data::DataPoint;
use crate::error::Result;
use crate::geometry::Point;
use crate::option::Resolver;
use crate::pipeline::{ChartStrategy, RenderContext};
use crate::surface::{LineJoin, PathId, PathStyle};

/// Layers are parallel series here, not additive segments.
#[derive(Clone, Debug, Default)]
pub struct LineChart {
    paths: Vec<Option<PathId>>,
}

impl LineChart {
    pub fn new() -> Self { Self::default() }
}

impl ChartStrategy for LineChart {
    fn name(&self) -> &'static str { "line" }

    fn compute_axes(&self, data: &[DataPoint]) -> Result<Axes> {
        line_axes(data)
    }

    fn draw_point(
        &mut self,
        ctx: &mut RenderContext<'_>,
        resolver: &Resolver<'_>,
        stacked_index: usize,
        x: f64,
        y: f64,
    ) {
        let to = Point::new(ctx.transform.x(x), ctx.transform.y(y));

        if self.paths.len() <= stacked_index {
            self.paths.resize(stacked_index + 1, None);
        }
        let path = match self.paths[stacked_index] {
            Some(id) => id,
            None => {
                let style = PathStyle {
                    stroke: resolver.resolve(&ctx.options.color),
                    stroke_width: resolver.resolve(&ctx.options.line_width),
                    join: LineJoin::Round,
                };
                let id = ctx.surface.begin_path(Point::new(0.0, to.y), style);
                self.paths[stacked_index] = Some(id);
                id
            }
        };
        ctx.surface.line_to(path, to);
    }

    fn draw_stack(
        &mut self,
        ctx: &mut RenderContext<'_>,
        index: usize,
        all_y: &[f64],
        _point: &DataPoint,
        _x: f64,
    ) {
        if index + 1 != ctx.options.data.len() {
            return;
        }
        let right = ctx.axes.x.pixel_length;
        for (series, &y) in all_y.iter().enumerate() {
            if let Some(Some(path)) = self.paths.get(series) {
                ctx.surface.line_to(*path, Point::new(right, ctx.transform.y(y)));
            }
        }
    }

    /// Line charts never draw a legend on their own.
    fn draw_graph(&mut self, _ctx: &mut RenderContext<'_>) {}
}
