// File: crates/tufte-core/src/legend.rs
// Summary: Legend rows resolved from the configured legend data.

use crate::color::Color;
use crate::option::Resolver;
use crate::options::ChartOptions;
use crate::pipeline::RenderContext;
use crate::surface::Annotation;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Resolved rows, last configured entry first. `None` without legend data.
pub fn legend_rows(options: &ChartOptions) -> Option<Vec<LegendEntry>> {
    let data = options.legend.data.as_ref()?;
    let mut rows: Vec<LegendEntry> = data
        .iter()
        .enumerate()
        .map(|(i, datum)| {
            let r = Resolver::new(datum, i, None, options);
            LegendEntry {
                color: r.resolve(&options.legend.color),
                label: r.resolve(&options.legend.label),
            }
        })
        .collect();
    rows.reverse();
    Some(rows)
}

/// Place the legend table at the top, just right of the plot area.
pub fn add_legend(ctx: &mut RenderContext<'_>) {
    if let Some(rows) = legend_rows(ctx.options) {
        let left = ctx.surface.width();
        ctx.surface.annotate(Annotation::Legend { rows, left, top: 0.0 });
    }
}
