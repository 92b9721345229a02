// File: crates/tufte-core/src/error.rs
// Summary: Fatal render errors raised by the axis pass and the traversal.

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

/// Every variant aborts the render in progress. Primitives emitted before the
/// failure stay on the surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid dimensions for plot, width = {width}, height = {height}")]
    InvalidDimension { width: f64, height: f64 },

    #[error("you must have at least one data point")]
    EmptyDataset,

    #[error("non-numeric value provided for y at index {index}: {value}")]
    NonNumericValue { index: usize, value: String },

    #[error("negative values not supported for bar graphs (index {index} sums to {sum})")]
    NegativeValue { index: usize, sum: f64 },

    #[error("you must have at least one y-value greater than 0 (max is {max})")]
    NoPositiveValue { max: f64 },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),
}
