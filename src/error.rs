use crate::types::location::LocationError;
use crate::weather::error::WeatherFetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgroclimaError {
    #[error(transparent)]
    Weather(#[from] WeatherFetchError),

    #[error(transparent)]
    Location(#[from] LocationError),
}
