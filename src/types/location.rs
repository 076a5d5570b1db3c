//! Geographical coordinates and the seam through which the dashboard
//! obtains the user's position.

use thiserror::Error;

/// A geographical position in decimal degrees, latitude before longitude.
///
/// Southern latitudes and western longitudes are negative, as reported by
/// browser geolocation and weather APIs alike.
///
/// # Examples
///
/// ```
/// use agroclima::LatLon;
///
/// let guatemala_city = LatLon(14.6349, -90.5069);
/// assert!(guatemala_city.0 > 0.0); // north of the equator
/// assert!(guatemala_city.1 < 0.0); // west of Greenwich
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Geolocation is not supported on this platform")]
    Unsupported,

    #[error("Failed to acquire location: {0}")]
    Unavailable(String),
}

/// A source of the user's current position.
///
/// Platform integrations (browser geolocation, GPS, IP lookup) implement
/// this; the rest of the crate only sees "a coordinate or an error".
pub trait LocationProvider {
    fn current_location(&self) -> Result<LatLon, LocationError>;
}

/// A provider that always reports the same coordinate. Useful headlessly
/// and as a fallback when acquisition is denied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub LatLon);

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Result<LatLon, LocationError> {
        Ok(self.0)
    }
}
