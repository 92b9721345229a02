// File: crates/tufte-core/src/data.rs
// Summary: Dataset model: one point per index slot, holding a scalar or a stack of scalars.
// Notes:
// - Raw values are kept as `Datum` so text read from files survives until the
//   render pass, where numeric coercion happens and may fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// One raw scalar as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    Number(f64),
    Text(String),
}

impl Datum {
    /// Numeric coercion. Text is trimmed and parsed, and blank text reads as 0.
    /// Only finite values count as numeric, so `"inf"` and NaN are rejected.
    pub fn to_f64(&self) -> Option<f64> {
        let v = match self {
            Datum::Number(n) => *n,
            Datum::Text(s) => match s.trim() {
                "" => 0.0,
                t => t.parse::<f64>().ok()?,
            },
        };
        v.is_finite().then_some(v)
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Number(n) => write!(f, "{n}"),
            Datum::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self { Datum::Number(v) }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self { Datum::Number(v as f64) }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self { Datum::Text(v.to_string()) }
}

impl From<String> for Datum {
    fn from(v: String) -> Self { Datum::Text(v) }
}

/// The primary field of a point: a single value or ordered stack layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointValue {
    Scalar(Datum),
    Stack(Vec<Datum>),
}

impl PointValue {
    /// Layers in order; a scalar is a stack of one.
    pub fn layers(&self) -> &[Datum] {
        match self {
            PointValue::Scalar(d) => std::slice::from_ref(d),
            PointValue::Stack(v) => v,
        }
    }
}

impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointValue::Scalar(d) => d.fmt(f),
            PointValue::Stack(v) => {
                let parts: Vec<String> = v.iter().map(Datum::to_string).collect();
                write!(f, "{}", parts.join(","))
            }
        }
    }
}

impl From<Datum> for PointValue {
    fn from(v: Datum) -> Self { PointValue::Scalar(v) }
}

impl From<f64> for PointValue {
    fn from(v: f64) -> Self { PointValue::Scalar(v.into()) }
}

impl From<i32> for PointValue {
    fn from(v: i32) -> Self { PointValue::Scalar(v.into()) }
}

impl From<&str> for PointValue {
    fn from(v: &str) -> Self { PointValue::Scalar(v.into()) }
}

impl From<Vec<f64>> for PointValue {
    fn from(v: Vec<f64>) -> Self { PointValue::Stack(v.into_iter().map(Datum::from).collect()) }
}

impl From<Vec<Datum>> for PointValue {
    fn from(v: Vec<Datum>) -> Self { PointValue::Stack(v) }
}

/// One slot along the index axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPoint")]
pub struct DataPoint {
    pub value: PointValue,
    /// Free text carried alongside the value, for computed options to read.
    pub label: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Full {
        value: PointValue,
        #[serde(default)]
        label: Option<String>,
    },
    Bare(PointValue),
}

impl From<RawPoint> for DataPoint {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Full { value, label } => Self { value, label },
            RawPoint::Bare(value) => Self { value, label: None },
        }
    }
}

impl DataPoint {
    pub fn new(value: impl Into<PointValue>) -> Self {
        Self { value: value.into(), label: None }
    }

    pub fn stacked(layers: Vec<f64>) -> Self {
        Self::new(layers)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Coerced stack layers for the point at `index`.
    pub fn values(&self, index: usize) -> Result<Vec<f64>> {
        self.value
            .layers()
            .iter()
            .map(|d| {
                d.to_f64().ok_or_else(|| ChartError::NonNumericValue {
                    index,
                    value: d.to_string(),
                })
            })
            .collect()
    }

    /// Sum of all stack layers.
    pub fn total(&self, index: usize) -> Result<f64> {
        Ok(self.values(index)?.iter().sum())
    }
}

impl From<PointValue> for DataPoint {
    fn from(v: PointValue) -> Self { DataPoint::new(v) }
}

impl From<f64> for DataPoint {
    fn from(v: f64) -> Self { DataPoint::new(v) }
}

impl From<i32> for DataPoint {
    fn from(v: i32) -> Self { DataPoint::new(v) }
}

impl From<&str> for DataPoint {
    fn from(v: &str) -> Self { DataPoint::new(v) }
}

impl From<Vec<f64>> for DataPoint {
    fn from(v: Vec<f64>) -> Self { DataPoint::stacked(v) }
}

/// Build a dataset from anything convertible into points.
pub fn dataset<I, T>(items: I) -> Vec<DataPoint>
where
    I: IntoIterator<Item = T>,
    T: Into<DataPoint>,
{
    items.into_iter().map(Into::into).collect()
}
