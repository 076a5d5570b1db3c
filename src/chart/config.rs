//! Declarative chart descriptions.
//!
//! Nothing in this module draws. A [`ChartConfig`] is a plain value handed
//! to a [`ChartBackend`](crate::ChartBackend) implementation, which forwards
//! it to the actual charting library (typically serialized to JSON across an
//! FFI or script boundary, hence the `serde` derives).

use serde::Serialize;

/// Base type of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
}

/// A single scatter point, addressed by its x-axis label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: String,
    pub y: f64,
}

/// One dataset of a chart, in draw stacking order (`order`, lower on top).
///
/// Tooltip text is pre-rendered: the config layer knows every value it
/// emits, so backends display `tooltip` verbatim instead of re-deriving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Dataset {
    Bar {
        label: String,
        values: Vec<f64>,
        background_color: String,
        bar_percentage: f64,
        category_percentage: f64,
        order: u8,
        tooltip: Option<String>,
    },
    Line {
        label: String,
        values: Vec<f64>,
        border_color: String,
        background_color: Option<String>,
        border_width: u8,
        /// Dash pattern in pixels; `None` draws a solid line.
        dash: Option<Vec<u8>>,
        fill: bool,
        tension: f64,
        order: u8,
    },
    Scatter {
        label: String,
        points: Vec<ScatterPoint>,
        color: String,
        point_radius: f64,
        order: u8,
        tooltip: Option<String>,
    },
}

/// Value bounds of the y axis. `max: None` lets the chart scale itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: Option<f64>,
}

/// A shaded horizontal region drawn behind the datasets by the zone-bands
/// plugin (see [`zone_bands_spec`](crate::zone_bands_spec)).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneBand {
    pub min: f64,
    pub max: f64,
    pub color: String,
}

/// A complete, self-contained chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub title: Option<String>,
    /// X-axis labels; per-month datasets index into these.
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_axis: AxisRange,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub legend: bool,
    pub animation: bool,
    /// Annotations for the zone-bands plugin; empty when unused.
    pub zones: Vec<ZoneBand>,
}
