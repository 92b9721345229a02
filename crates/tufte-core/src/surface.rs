// File: crates/tufte-core/src/surface.rs
// Summary: Rendering backend contract and an in-memory surface that records what it is asked to draw.

use tracing::trace;

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::legend::LegendEntry;

/// Handle to a polyline previously started with [`Surface::begin_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub usize);

/// Rectangles are both filled and stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectStyle {
    pub fill: Color,
    pub stroke: Color,
}

impl RectStyle {
    pub const fn solid(color: Color) -> Self { Self { fill: color, stroke: color } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStyle {
    pub stroke: Color,
    pub stroke_width: f64,
    pub join: LineJoin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    /// Total above a bar.
    Bar,
    /// Category name under the index axis.
    Axis,
}

impl LabelKind {
    pub fn class(&self) -> &'static str {
        match self {
            LabelKind::Bar => "bar-label",
            LabelKind::Axis => "axis-label",
        }
    }
}

/// Vertical anchoring of an annotation, in pixels from the plot's edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalAnchor {
    /// Distance of the annotation's top edge below the plot's top edge.
    Top(f64),
    /// Distance of the annotation's bottom edge above the plot's bottom edge.
    Bottom(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub vertical: VerticalAnchor,
    pub width: Option<f64>,
}

/// Non-vector elements positioned absolutely over the plot.
#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    Label { kind: LabelKind, text: String, placement: Placement },
    /// Rows are listed top to bottom.
    Legend { rows: Vec<LegendEntry>, left: f64, top: f64 },
}

pub trait Surface {
    /// Plot width in pixels.
    fn width(&self) -> f64;
    /// Plot height in pixels.
    fn height(&self) -> f64;
    fn draw_rect(&mut self, rect: Rect, style: RectStyle);
    fn begin_path(&mut self, start: Point, style: PathStyle) -> PathId;
    /// Extend `path` with a straight segment. Unknown ids are ignored.
    fn line_to(&mut self, path: PathId, to: Point);
    fn annotate(&mut self, annotation: Annotation);
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedPath {
    pub style: PathStyle,
    pub points: Vec<Point>,
}

/// Keeps every primitive in memory. Used headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub rects: Vec<(Rect, RectStyle)>,
    pub paths: Vec<RecordedPath>,
    pub annotations: Vec<Annotation>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Label texts of one kind, in emission order.
    pub fn labels(&self, kind: LabelKind) -> Vec<&str> {
        self.annotations
            .iter()
            .filter_map(|a| match a {
                Annotation::Label { kind: k, text, .. } if *k == kind => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn legend(&self) -> Option<&[LegendEntry]> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::Legend { rows, .. } => Some(rows.as_slice()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.paths.is_empty() && self.annotations.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 { self.width }

    fn height(&self) -> f64 { self.height }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        trace!(?rect, "rect");
        self.rects.push((rect, style));
    }

    fn begin_path(&mut self, start: Point, style: PathStyle) -> PathId {
        self.paths.push(RecordedPath { style, points: vec![start] });
        PathId(self.paths.len() - 1)
    }

    fn line_to(&mut self, path: PathId, to: Point) {
        if let Some(p) = self.paths.get_mut(path.0) {
            p.points.push(to);
        }
    }

    fn annotate(&mut self, annotation: Annotation) {
        trace!(?annotation, "annotation");
        self.annotations.push(annotation);
    }
}
