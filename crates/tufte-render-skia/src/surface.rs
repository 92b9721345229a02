// File: crates/tufte-render-skia/src/surface.rs
// Summary: CPU raster Surface: plot area inset inside a larger canvas, annotations painted as text.

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use tracing::{debug, trace};

use tufte_core::geometry::{Point, Rect};
use tufte_core::surface::{
    Annotation, LabelKind, LineJoin, PathId, PathStyle, Placement, RectStyle, VerticalAnchor,
};
use tufte_core::{Color, LegendEntry, Surface};

use crate::insets::{Insets, LEGEND_OFFSET, SWATCH_GAP};
use crate::text::TextShaper;

/// Extra room between an annotation and the edge it is anchored to.
const LABEL_GAP: f32 = 2.0;

#[derive(Clone, Debug)]
pub struct SkiaOptions {
    /// Plot width in pixels; the canvas adds `insets` around it.
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: Color,
    pub text_color: Color,
    pub font_size: f32,
}

impl Default for SkiaOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
            insets: Insets::default(),
            background: Color::WHITE,
            text_color: Color::rgb(0x33, 0x33, 0x33),
            font_size: 12.0,
        }
    }
}

impl SkiaOptions {
    pub fn canvas_size(&self) -> (i32, i32) {
        (
            self.width.max(0) + self.insets.horizontal() as i32,
            self.height.max(0) + self.insets.vertical() as i32,
        )
    }
}

struct PendingPath {
    style: PathStyle,
    points: Vec<Point>,
}

/// Paths are buffered as they grow and stroked when the image is encoded.
pub struct SkiaSurface {
    surface: skia::Surface,
    opts: SkiaOptions,
    text: TextShaper,
    paths: Vec<PendingPath>,
}

pub fn to_sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_join(j: LineJoin) -> skia::paint::Join {
    match j {
        LineJoin::Miter => skia::paint::Join::Miter,
        LineJoin::Round => skia::paint::Join::Round,
        LineJoin::Bevel => skia::paint::Join::Bevel,
    }
}

impl SkiaSurface {
    pub fn new(opts: SkiaOptions) -> Result<Self> {
        let (w, h) = opts.canvas_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        surface.canvas().clear(to_sk(opts.background));
        Ok(Self { surface, opts, text: TextShaper::new(), paths: Vec::new() })
    }

    fn origin(&self) -> (f32, f32) {
        (self.opts.insets.left as f32, self.opts.insets.top as f32)
    }

    fn flush_paths(&mut self) {
        let (ox, oy) = self.origin();
        let canvas = self.surface.canvas();
        for pending in self.paths.drain(..) {
            let mut points = pending.points.iter();
            let Some(first) = points.next() else { continue };
            let mut builder = skia::PathBuilder::new();
            builder.move_to((ox + first.x as f32, oy + first.y as f32));
            for p in points {
                builder.line_to((ox + p.x as f32, oy + p.y as f32));
            }
            let path = builder.detach();

            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(pending.style.stroke_width as f32);
            stroke.set_stroke_join(to_join(pending.style.join));
            stroke.set_color(to_sk(pending.style.stroke));
            canvas.draw_path(&path, &stroke);
        }
    }

    /// Encode the canvas as PNG. Paths still open are stroked first.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        self.flush_paths();
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn draw_label(&mut self, kind: LabelKind, text: &str, placement: Placement) {
        let (ox, oy) = self.origin();
        let size = self.opts.font_size;
        let mut paragraph = self.text.layout(text, size, to_sk(self.opts.text_color));
        let text_w = paragraph.max_intrinsic_width();
        let text_h = paragraph.height();

        let slot = placement.width.map(|w| w as f32).unwrap_or(text_w);
        let x = ox + placement.left as f32 + (slot - text_w) * 0.5;
        let y = match placement.vertical {
            VerticalAnchor::Top(t) => oy + t as f32 + LABEL_GAP,
            VerticalAnchor::Bottom(b) => {
                oy + self.opts.height as f32 - b as f32 - text_h - LABEL_GAP
            }
        };
        trace!(class = kind.class(), text, x, y, "label");
        paragraph.paint(self.surface.canvas(), (x, y));
    }

    fn draw_legend(&mut self, rows: &[LegendEntry], left: f64, top: f64) {
        let (ox, oy) = self.origin();
        let size = self.opts.font_size;
        let row_h = size + 6.0;
        let x = ox + left as f32 + LEGEND_OFFSET;
        let text_color = to_sk(self.opts.text_color);

        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        for (i, row) in rows.iter().enumerate() {
            let y = oy + top as f32 + i as f32 * row_h;
            paint.set_color(to_sk(row.color));
            self.surface
                .canvas()
                .draw_rect(skia::Rect::from_xywh(x, y + 2.0, size, size), &paint);
            self.text
                .draw_top_left(self.surface.canvas(), &row.label, x + size + SWATCH_GAP, y, size, text_color);
        }
    }
}

impl Surface for SkiaSurface {
    fn width(&self) -> f64 { self.opts.width as f64 }

    fn height(&self) -> f64 { self.opts.height as f64 }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        let (ox, oy) = self.origin();
        let r = skia::Rect::from_xywh(
            ox + rect.left as f32,
            oy + rect.top as f32,
            rect.width as f32,
            rect.height as f32,
        );
        let canvas = self.surface.canvas();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_sk(style.fill));
        canvas.draw_rect(r, &fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(to_sk(style.stroke));
        canvas.draw_rect(r, &stroke);
    }

    fn begin_path(&mut self, start: Point, style: PathStyle) -> PathId {
        self.paths.push(PendingPath { style, points: vec![start] });
        PathId(self.paths.len() - 1)
    }

    fn line_to(&mut self, path: PathId, to: Point) {
        if let Some(p) = self.paths.get_mut(path.0) {
            p.points.push(to);
        }
    }

    fn annotate(&mut self, annotation: Annotation) {
        match annotation {
            Annotation::Label { kind, text, placement } => self.draw_label(kind, &text, placement),
            Annotation::Legend { rows, left, top } => self.draw_legend(&rows, left, top),
        }
    }
}
