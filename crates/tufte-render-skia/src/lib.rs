// File: crates/tufte-render-skia/src/lib.rs
// Summary: Skia renderer crate; hosts the raster Surface and PNG helpers.

pub mod insets;
pub mod surface;
pub mod text;

pub use insets::Insets;
pub use surface::{SkiaOptions, SkiaSurface};
pub use text::TextShaper;

use anyhow::{Context, Result};
use tufte_core::Chart;

/// Render `chart` onto a fresh raster surface and return PNG bytes.
pub fn render_png(chart: &Chart, opts: SkiaOptions) -> Result<Vec<u8>> {
    let mut surface = SkiaSurface::new(opts)?;
    chart
        .render(&mut surface)
        .with_context(|| format!("failed to render {:?} chart", chart.kind))?;
    surface.encode_png()
}
