// File: crates/tufte-core/src/lib.rs
// Summary: Core library entry point; exports the render pipeline, chart strategies and options.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod geometry;
pub mod legend;
pub mod line;
pub mod option;
pub mod options;
pub mod pipeline;
pub mod scale;
pub mod surface;

pub use axis::{bar_axes, line_axes, Axes, Axis};
pub use bar::BarChart;
pub use chart::{Chart, ChartKind};
pub use color::Color;
pub use config::ChartConfig;
pub use data::{dataset, DataPoint, Datum, PointValue};
pub use error::{ChartError, Result};
pub use format::{format_number, format_value};
pub use legend::LegendEntry;
pub use line::LineChart;
pub use option::{resolve, OptionContext, OptionValue, Resolver};
pub use options::{AfterDraw, ChartOptions, LegendOptions};
pub use pipeline::{render, ChartStrategy, RenderContext};
pub use scale::Transform;
pub use surface::{Annotation, LabelKind, RecordingSurface, Surface};
