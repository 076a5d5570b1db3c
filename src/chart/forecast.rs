//! Assembles the precipitation forecast panel's chart description.
//!
//! Pure pass-through: labels and values land in the config unchanged, in
//! order. Any aggregation happens upstream in whatever produced the
//! forecast series.

use crate::chart::config::{AxisRange, ChartConfig, ChartType, Dataset};

const PRECIPITATION_BORDER: &str = "rgba(30,144,255,1)";
const PRECIPITATION_FILL: &str = "rgba(30,144,255,0.2)";

/// Builds the forecast line chart: one filled precipitation series over the
/// given labels, y axis starting at zero and scaling to the data.
pub fn forecast_chart_config(labels: &[String], precipitation: &[f64]) -> ChartConfig {
    ChartConfig {
        chart_type: ChartType::Line,
        title: None,
        labels: labels.to_vec(),
        datasets: vec![Dataset::Line {
            label: "Precipitación (mm)".to_string(),
            values: precipitation.to_vec(),
            border_color: PRECIPITATION_BORDER.to_string(),
            background_color: Some(PRECIPITATION_FILL.to_string()),
            border_width: 2,
            dash: None,
            fill: true,
            tension: 0.3,
            order: 1,
        }],
        y_axis: AxisRange {
            min: 0.0,
            max: None,
        },
        x_title: None,
        y_title: None,
        legend: true,
        animation: true,
        zones: Vec::new(),
    }
}
