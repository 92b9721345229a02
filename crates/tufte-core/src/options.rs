// File: crates/tufte-core/src/options.rs
// Summary: Chart configuration recognized by the bar and line strategies, with defaults.

use std::fmt;
use std::rc::Rc;

use crate::color::{default_colors, Color};
use crate::data::DataPoint;
use crate::format::format_value;
use crate::option::{OptionContext, OptionValue};
use crate::pipeline::RenderContext;

pub type PointHook = Rc<dyn Fn(&mut RenderContext<'_>, usize, usize)>;
pub type StackHook = Rc<dyn Fn(&mut RenderContext<'_>, usize)>;
pub type GraphHook = Rc<dyn Fn(&mut RenderContext<'_>)>;

/// Callbacks run after each point, each stack, and once after the whole graph.
#[derive(Clone, Default)]
pub struct AfterDraw {
    pub point: Option<PointHook>,
    pub stack: Option<StackHook>,
    pub graph: Option<GraphHook>,
}

impl fmt::Debug for AfterDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AfterDraw")
            .field("point", &self.point.is_some())
            .field("stack", &self.stack.is_some())
            .field("graph", &self.graph.is_some())
            .finish()
    }
}

/// Legend rows are resolved against each legend datum (its label text).
#[derive(Clone, Debug)]
pub struct LegendOptions {
    pub data: Option<Vec<String>>,
    pub color: OptionValue<Color, String>,
    pub label: OptionValue<String, String>,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            data: None,
            color: OptionValue::computed(|ctx| ctx.options.palette_color(ctx.index)),
            label: OptionValue::computed(|ctx: &OptionContext<'_, String>| ctx.element.clone()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub data: Vec<DataPoint>,
    /// Bar width in index units (one slot is 1.0 wide).
    pub bar_width: OptionValue<f64>,
    /// Stroke width of line series, in pixels.
    pub line_width: OptionValue<f64>,
    pub colors: Vec<Color>,
    pub color: OptionValue<Color>,
    pub bar_label: OptionValue<String>,
    pub axis_label: OptionValue<String>,
    pub legend: LegendOptions,
    pub after_draw: AfterDraw,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            bar_width: OptionValue::Literal(0.8),
            line_width: OptionValue::Literal(4.0),
            colors: default_colors(),
            color: OptionValue::computed(|ctx| {
                ctx.options.palette_color(ctx.stacked_index.unwrap_or(0))
            }),
            bar_label: OptionValue::computed(|ctx: &OptionContext<'_>| {
                ctx.element.total(ctx.index).map(format_value).unwrap_or_default()
            }),
            axis_label: OptionValue::computed(|ctx| ctx.index.to_string()),
            legend: LegendOptions::default(),
            after_draw: AfterDraw::default(),
        }
    }
}

impl ChartOptions {
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self { data, ..Self::default() }
    }

    /// `colors[i % len]`, or black when the palette is empty.
    pub fn palette_color(&self, i: usize) -> Color {
        if self.colors.is_empty() {
            Color::BLACK
        } else {
            self.colors[i % self.colors.len()]
        }
    }

    pub fn with_bar_width(mut self, v: impl Into<OptionValue<f64>>) -> Self {
        self.bar_width = v.into();
        self
    }

    pub fn with_line_width(mut self, v: impl Into<OptionValue<f64>>) -> Self {
        self.line_width = v.into();
        self
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_color(mut self, v: impl Into<OptionValue<Color>>) -> Self {
        self.color = v.into();
        self
    }

    pub fn with_bar_label(mut self, v: impl Into<OptionValue<String>>) -> Self {
        self.bar_label = v.into();
        self
    }

    pub fn with_axis_label(mut self, v: impl Into<OptionValue<String>>) -> Self {
        self.axis_label = v.into();
        self
    }

    pub fn with_legend<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legend.data = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn on_point(mut self, f: impl Fn(&mut RenderContext<'_>, usize, usize) + 'static) -> Self {
        self.after_draw.point = Some(Rc::new(f));
        self
    }

    pub fn on_stack(mut self, f: impl Fn(&mut RenderContext<'_>, usize) + 'static) -> Self {
        self.after_draw.stack = Some(Rc::new(f));
        self
    }

    pub fn on_graph(mut self, f: impl Fn(&mut RenderContext<'_>) + 'static) -> Self {
        self.after_draw.graph = Some(Rc::new(f));
        self
    }
}
