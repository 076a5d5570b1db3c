//! Assembles the crop calendar widget's chart description from a
//! [`BandSeries`].
//!
//! Dataset order and colors follow the widget's visual design: shaded
//! planting/harvest lanes at the back, the four threshold lines above them,
//! then the dashed average line, and the current-month marker on top.

use crate::calendar::band_series::BandSeries;
use crate::chart::config::{AxisRange, ChartConfig, ChartType, Dataset, ScatterPoint};
use crate::types::month::{month_label, MONTH_LABELS};

const PLANTING_FILL: &str = "rgba(25,135,84,0.22)";
const HARVEST_FILL: &str = "rgba(13,110,253,0.20)";

const THRESHOLD_COLORS: [(f64, &str); 4] = [
    (85.0, "rgba(25,135,84,0.5)"),
    (70.0, "rgba(13,110,253,0.5)"),
    (50.0, "rgba(255,193,7,0.5)"),
    (30.0, "rgba(220,53,69,0.5)"),
];

fn threshold_color(level: f64) -> &'static str {
    THRESHOLD_COLORS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, color)| *color)
        .unwrap_or("rgba(108,117,125,0.5)")
}

/// Builds the full crop calendar chart description.
///
/// The y axis is fixed to `0..=100` regardless of content; the x axis
/// carries the twelve Spanish month labels. Marker and average-line
/// datasets are emitted empty when the series carries no score, so the
/// dataset list has a stable shape.
pub fn crop_calendar_config(series: &BandSeries) -> ChartConfig {
    let score_color = series.suitability.color().to_string();

    let mut datasets = vec![
        Dataset::Bar {
            label: "Plantación".to_string(),
            values: series.planting.to_vec(),
            background_color: PLANTING_FILL.to_string(),
            bar_percentage: 0.95,
            category_percentage: 0.95,
            order: 5,
            tooltip: Some("Mes de siembra".to_string()),
        },
        Dataset::Bar {
            label: "Cosecha".to_string(),
            values: series.harvest.to_vec(),
            background_color: HARVEST_FILL.to_string(),
            bar_percentage: 0.95,
            category_percentage: 0.95,
            order: 5,
            tooltip: Some("Mes de cosecha".to_string()),
        },
    ];

    for line in &series.thresholds {
        datasets.push(Dataset::Line {
            label: format!("{}%", line.level),
            values: line.values.to_vec(),
            border_color: threshold_color(line.level).to_string(),
            background_color: None,
            border_width: 1,
            dash: None,
            fill: false,
            tension: 0.0,
            order: 3,
        });
    }

    datasets.push(Dataset::Line {
        label: "Promedio (línea)".to_string(),
        values: series
            .average_line
            .map(|values| values.to_vec())
            .unwrap_or_default(),
        border_color: score_color.clone(),
        background_color: None,
        border_width: 1,
        dash: Some(vec![5, 4]),
        fill: false,
        tension: 0.0,
        order: 2,
    });

    let marker_points: Vec<ScatterPoint> = series
        .marker
        .iter()
        .filter_map(|point| {
            month_label(point.month).map(|label| ScatterPoint {
                x: label.to_string(),
                y: point.value,
            })
        })
        .collect();
    let marker_tooltip = series
        .marker
        .map(|point| format!("Promedio mes actual: {:.0}%", point.value));
    datasets.push(Dataset::Scatter {
        label: "Promedio Mes Actual".to_string(),
        points: marker_points,
        color: score_color,
        point_radius: 6.0,
        order: 1,
        tooltip: marker_tooltip,
    });

    ChartConfig {
        chart_type: ChartType::Bar,
        title: Some("Calendario & Adecuación".to_string()),
        labels: MONTH_LABELS.iter().map(|label| label.to_string()).collect(),
        datasets,
        y_axis: AxisRange {
            min: 0.0,
            max: Some(100.0),
        },
        x_title: Some("Mes".to_string()),
        y_title: Some("Puntaje %".to_string()),
        legend: false,
        animation: false,
        zones: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::band_series::build_band_series;
    use crate::calendar::month_parser::parse_months;
    use crate::types::month::MonthSet;

    fn sample_series(score: Option<f64>) -> BandSeries {
        let planting = parse_months(Some("May-Jun"));
        let harvest = parse_months(Some("Sep-Oct"));
        build_band_series(&planting, &harvest, score, 9)
    }

    #[test]
    fn axis_is_fixed_to_the_score_scale() {
        let config = crop_calendar_config(&sample_series(Some(80.0)));
        assert_eq!(config.y_axis.min, 0.0);
        assert_eq!(config.y_axis.max, Some(100.0));
        assert_eq!(config.labels.len(), 12);
        assert_eq!(config.labels[0], "Ene");
        assert_eq!(config.labels[11], "Dic");
    }

    #[test]
    fn dataset_list_has_a_stable_shape() {
        let with_score = crop_calendar_config(&sample_series(Some(80.0)));
        let without_score = crop_calendar_config(&sample_series(None));
        // 2 lanes + 4 thresholds + average line + marker.
        assert_eq!(with_score.datasets.len(), 8);
        assert_eq!(without_score.datasets.len(), 8);
    }

    #[test]
    fn lanes_carry_tooltip_texts() {
        let config = crop_calendar_config(&sample_series(Some(80.0)));
        match &config.datasets[0] {
            Dataset::Bar { label, tooltip, .. } => {
                assert_eq!(label, "Plantación");
                assert_eq!(tooltip.as_deref(), Some("Mes de siembra"));
            }
            other => panic!("expected planting bar, got {other:?}"),
        }
        match &config.datasets[1] {
            Dataset::Bar { label, tooltip, .. } => {
                assert_eq!(label, "Cosecha");
                assert_eq!(tooltip.as_deref(), Some("Mes de cosecha"));
            }
            other => panic!("expected harvest bar, got {other:?}"),
        }
    }

    #[test]
    fn marker_is_a_single_labeled_point() {
        let config = crop_calendar_config(&sample_series(Some(82.4)));
        match config.datasets.last().unwrap() {
            Dataset::Scatter {
                points, tooltip, ..
            } => {
                assert_eq!(points.len(), 1);
                assert_eq!(points[0].x, "Sep");
                assert_eq!(points[0].y, 82.4);
                assert_eq!(tooltip.as_deref(), Some("Promedio mes actual: 82%"));
            }
            other => panic!("expected scatter marker, got {other:?}"),
        }
    }

    #[test]
    fn score_free_series_emits_empty_marker_and_average() {
        let config = crop_calendar_config(&sample_series(None));
        match config.datasets.last().unwrap() {
            Dataset::Scatter {
                points, tooltip, ..
            } => {
                assert!(points.is_empty());
                assert!(tooltip.is_none());
            }
            other => panic!("expected scatter marker, got {other:?}"),
        }
        match &config.datasets[6] {
            Dataset::Line { label, values, .. } => {
                assert_eq!(label, "Promedio (línea)");
                assert!(values.is_empty());
            }
            other => panic!("expected average line, got {other:?}"),
        }
    }

    #[test]
    fn marker_and_average_use_the_suitability_color() {
        let empty = MonthSet::new();
        let series = build_band_series(&empty, &empty, Some(90.0), 2);
        let config = crop_calendar_config(&series);
        match config.datasets.last().unwrap() {
            Dataset::Scatter { color, .. } => assert_eq!(color, "#198754"),
            other => panic!("expected scatter marker, got {other:?}"),
        }
    }
}
