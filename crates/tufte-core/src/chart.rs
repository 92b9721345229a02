// File: crates/tufte-core/src/chart.rs
// Summary: Chart entry points binding options and a chart type to a target surface.

use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::axis::Axes;
use crate::bar::BarChart;
use crate::error::Result;
use crate::line::LineChart;
use crate::options::ChartOptions;
use crate::pipeline::{render, ChartStrategy};
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
}

impl ChartKind {
    /// A fresh strategy; its mutable state lives for one render only.
    pub fn strategy(&self) -> Box<dyn ChartStrategy> {
        match self {
            ChartKind::Bar => Box::new(BarChart::new()),
            ChartKind::Line => Box::new(LineChart::new()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub options: ChartOptions,
}

impl Chart {
    pub fn new(kind: ChartKind, options: ChartOptions) -> Self {
        Self { kind, options }
    }

    pub fn bar(options: ChartOptions) -> Self {
        Self::new(ChartKind::Bar, options)
    }

    pub fn line(options: ChartOptions) -> Self {
        Self::new(ChartKind::Line, options)
    }

    /// Draw onto `surface`, returning the axes the chart was laid out with.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<Axes> {
        let _span = info_span!("render", kind = ?self.kind, points = self.options.data.len()).entered();
        let mut strategy = self.kind.strategy();
        render(surface, &self.options, strategy.as_mut())
    }
}
