//! Defines the `Suitability` semaphore category derived from a crop's
//! average suitability score.

use serde::Serialize;
use std::fmt;

/// Semaphore classification of a suitability score.
///
/// Scores are expected on the clamped `0..=100` scale (see
/// [`clamp_score`](crate::clamp_score)). Thresholds are evaluated top-down
/// with inclusive lower bounds, so a score satisfying several bands is
/// assigned the highest-ranking one. An absent score maps to
/// [`Suitability::Unknown`] rather than an error.
///
/// # Examples
///
/// ```
/// use agroclima::Suitability;
///
/// assert_eq!(Suitability::from_score(Some(85.0)), Suitability::Excellent);
/// assert_eq!(Suitability::from_score(Some(84.999)), Suitability::Good);
/// assert_eq!(Suitability::from_score(None), Suitability::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suitability {
    /// Score of 85 or above.
    Excellent,
    /// Score in `70..85`.
    Good,
    /// Score in `55..70`.
    Normal,
    /// Score below 55.
    Poor,
    /// No score available.
    Unknown,
}

impl Suitability {
    /// Classifies a clamped average score.
    ///
    /// Non-finite values are treated the same as an absent score.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(value) if !value.is_finite() => Suitability::Unknown,
            Some(value) if value >= 85.0 => Suitability::Excellent,
            Some(value) if value >= 70.0 => Suitability::Good,
            Some(value) if value >= 55.0 => Suitability::Normal,
            Some(_) => Suitability::Poor,
            None => Suitability::Unknown,
        }
    }

    /// The fixed display color associated with the category.
    pub fn color(self) -> &'static str {
        match self {
            Suitability::Excellent => "#198754",
            Suitability::Good => "#0d6efd",
            Suitability::Normal => "#ffc107",
            Suitability::Poor => "#dc3545",
            Suitability::Unknown => "#6c757d",
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suitability::Excellent => "excellent",
            Suitability::Good => "good",
            Suitability::Normal => "normal",
            Suitability::Poor => "poor",
            Suitability::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
