// File: crates/tufte-core/src/bar.rs
// Summary: Bar strategy: stacked rectangles, total and category labels, legend.

use tracing::trace;

use crate::axis::{bar_axes, Axes};
use crate::data::DataPoint;
use crate::error::Result;
use crate::geometry::Rect;
use crate::legend::add_legend;
use crate::option::Resolver;
use crate::pipeline::{ChartStrategy, RenderContext};
use crate::surface::{Annotation, LabelKind, Placement, RectStyle, VerticalAnchor};

/// Holds the running height of the stack being drawn. Zero between stacks.
#[derive(Clone, Debug, Default)]
pub struct BarChart {
    cumulative_y: f64,
}

impl BarChart {
    pub fn new() -> Self { Self::default() }

    pub fn cumulative_y(&self) -> f64 { self.cumulative_y }
}

impl ChartStrategy for BarChart {
    fn name(&self) -> &'static str { "bar" }

    fn compute_axes(&self, data: &[DataPoint]) -> Result<Axes> {
        bar_axes(data)
    }

    fn draw_point(
        &mut self,
        ctx: &mut RenderContext<'_>,
        resolver: &Resolver<'_>,
        _stacked_index: usize,
        x: f64,
        y: f64,
    ) {
        let half = resolver.resolve(&ctx.options.bar_width) / 2.0;
        let color = resolver.resolve(&ctx.options.color);
        let t = ctx.transform;

        let left = x - half;
        let top = self.cumulative_y + y;
        // Filled and stroked in one color so adjoining layers leave no seam.
        let rect = Rect::from_ltwh(t.x(left), t.y(top), t.w(half * 2.0), t.h(y));
        trace!(index = resolver.index(), ?rect, "bar layer");
        ctx.surface.draw_rect(rect, RectStyle::solid(color));

        self.cumulative_y += y;
    }

    fn draw_stack(
        &mut self,
        ctx: &mut RenderContext<'_>,
        index: usize,
        _all_y: &[f64],
        point: &DataPoint,
        x: f64,
    ) {
        let resolver = Resolver::new(point, index, None, ctx.options);
        let t = ctx.transform;
        let left = t.x(x - 0.5);
        let width = Some(t.w(1.0));

        ctx.surface.annotate(Annotation::Label {
            kind: LabelKind::Bar,
            text: resolver.resolve(&ctx.options.bar_label),
            placement: Placement {
                left,
                vertical: VerticalAnchor::Bottom(t.h(self.cumulative_y)),
                width,
            },
        });
        ctx.surface.annotate(Annotation::Label {
            kind: LabelKind::Axis,
            text: resolver.resolve(&ctx.options.axis_label),
            placement: Placement { left, vertical: VerticalAnchor::Top(t.y(0.0)), width },
        });

        self.cumulative_y = 0.0;
    }

    fn draw_graph(&mut self, ctx: &mut RenderContext<'_>) {
        add_legend(ctx);
    }
}
