//! Builds the per-month numeric series behind the crop calendar widget:
//! planting and harvest lanes, threshold reference lines, the replicated
//! average line and the current-month marker.

use crate::types::month::{MonthSet, MONTHS_PER_YEAR};
use crate::types::suitability::Suitability;

/// Magnitude of an active lane month. Lanes are full-height bars shaded
/// behind the score axis.
pub const BAND_MAGNITUDE: f64 = 100.0;

/// Score-axis levels of the fixed threshold reference lines, highest first.
pub const THRESHOLD_LEVELS: [f64; 4] = [85.0, 70.0, 50.0, 30.0];

/// A single `(month, value)` point on the score axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthPoint {
    /// Month number in `1..=12`.
    pub month: u8,
    pub value: f64,
}

/// A constant reference line across all twelve months.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdLine {
    pub level: f64,
    pub values: [f64; MONTHS_PER_YEAR],
}

/// Chart-ready series for the crop calendar, index 0 = January.
///
/// Produced by [`build_band_series`]; consumed by
/// [`crop_calendar_config`](crate::crop_calendar_config).
#[derive(Debug, Clone, PartialEq)]
pub struct BandSeries {
    /// Planting lane: [`BAND_MAGNITUDE`] for active months, `0.0` otherwise.
    pub planting: [f64; MONTHS_PER_YEAR],
    /// Harvest lane, independent of the planting lane.
    pub harvest: [f64; MONTHS_PER_YEAR],
    /// Fixed reference lines at [`THRESHOLD_LEVELS`].
    pub thresholds: Vec<ThresholdLine>,
    /// The clamped score replicated across the year, when a score exists.
    pub average_line: Option<[f64; MONTHS_PER_YEAR]>,
    /// Single point at the current month, when a score exists.
    pub marker: Option<MonthPoint>,
    /// The clamped score the marker and average line carry.
    pub score: Option<f64>,
    /// Semaphore category of the clamped score.
    pub suitability: Suitability,
}

/// Clamps a raw average score into `0..=100`.
///
/// Non-finite values (and `None`) mean "no score": downstream series drop
/// their marker and the classification degrades to
/// [`Suitability::Unknown`].
///
/// # Examples
///
/// ```
/// use agroclima::clamp_score;
///
/// assert_eq!(clamp_score(Some(137.0)), Some(100.0));
/// assert_eq!(clamp_score(Some(-20.0)), Some(0.0));
/// assert_eq!(clamp_score(Some(f64::NAN)), None);
/// assert_eq!(clamp_score(None), None);
/// ```
pub fn clamp_score(raw: Option<f64>) -> Option<f64> {
    match raw {
        Some(value) if value.is_finite() => Some(value.clamp(0.0, 100.0)),
        _ => None,
    }
}

/// Builds the full band series for one crop.
///
/// Pure: identical inputs always produce identical output. The current
/// month is an explicit input so callers that know "now" (the render
/// coordinator) decide where the marker lands; a month outside `1..=12`
/// suppresses the marker.
pub fn build_band_series(
    planting: &MonthSet,
    harvest: &MonthSet,
    raw_score: Option<f64>,
    current_month: u8,
) -> BandSeries {
    let score = clamp_score(raw_score);

    let thresholds = THRESHOLD_LEVELS
        .iter()
        .map(|&level| ThresholdLine {
            level,
            values: [level; MONTHS_PER_YEAR],
        })
        .collect();

    let marker = score.and_then(|value| {
        if (1..=MONTHS_PER_YEAR as u8).contains(&current_month) {
            Some(MonthPoint {
                month: current_month,
                value,
            })
        } else {
            None
        }
    });

    BandSeries {
        planting: lane_values(planting),
        harvest: lane_values(harvest),
        thresholds,
        average_line: score.map(|value| [value; MONTHS_PER_YEAR]),
        marker,
        score,
        suitability: Suitability::from_score(score),
    }
}

fn lane_values(months: &MonthSet) -> [f64; MONTHS_PER_YEAR] {
    let mut values = [0.0; MONTHS_PER_YEAR];
    for (index, value) in values.iter_mut().enumerate() {
        if months.contains((index + 1) as u8) {
            *value = BAND_MAGNITUDE;
        }
    }
    values
}
