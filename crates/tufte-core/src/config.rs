// File: crates/tufte-core/src/config.rs
// Summary: Literal chart configuration loaded from JSON and turned into ChartOptions.

use serde::{Deserialize, Serialize};

use crate::chart::{Chart, ChartKind};
use crate::color::{default_colors, Color};
use crate::data::DataPoint;
use crate::error::{ChartError, Result};
use crate::option::{OptionContext, OptionValue};
use crate::options::ChartOptions;

/// Every field is optional in the file; missing ones take the chart defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub kind: ChartKind,
    /// Plot size in pixels, excluding label margins.
    pub width: f64,
    pub height: f64,
    pub bar_width: f64,
    pub line_width: f64,
    pub colors: Vec<Color>,
    pub legend: Option<Vec<String>>,
    pub data: Vec<DataPoint>,
    pub output: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Bar,
            width: 600.0,
            height: 300.0,
            bar_width: 0.8,
            line_width: 4.0,
            colors: default_colors(),
            legend: None,
            data: Vec::new(),
            output: None,
        }
    }
}

impl ChartConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }

    /// Points with a `label` show it under the axis; the rest show their index.
    pub fn to_options(&self) -> ChartOptions {
        let axis_label: OptionValue<String> = OptionValue::computed(|ctx: &OptionContext<'_>| {
            ctx.element.label.clone().unwrap_or_else(|| ctx.index.to_string())
        });
        let mut options = ChartOptions::new(self.data.clone())
            .with_bar_width(self.bar_width)
            .with_line_width(self.line_width)
            .with_colors(self.colors.clone())
            .with_axis_label(axis_label);
        options.legend.data = self.legend.clone();
        options
    }

    pub fn to_chart(&self) -> Chart {
        Chart::new(self.kind, self.to_options())
    }
}
