mod calendar;
mod chart;
mod error;
mod render;
mod types;
mod weather;

pub use error::AgroclimaError;

pub use calendar::band_series::{
    build_band_series, clamp_score, BandSeries, MonthPoint, ThresholdLine, BAND_MAGNITUDE,
    THRESHOLD_LEVELS,
};
pub use calendar::month_parser::parse_months;

pub use chart::config::{
    AxisRange, ChartConfig, ChartType, Dataset, ScatterPoint, ZoneBand,
};
pub use chart::crop_calendar::crop_calendar_config;
pub use chart::forecast::forecast_chart_config;
pub use chart::plugins::{zone_bands_spec, PluginSpec, ZONE_BANDS_PLUGIN_ID};

pub use render::backend::{ChartBackend, ChartHandle, RecordingBackend};
pub use render::coordinator::RenderCoordinator;

pub use types::location::{FixedLocation, LatLon, LocationError, LocationProvider};
pub use types::month::{month_label, MonthSet, MONTHS_PER_YEAR, MONTH_LABELS};
pub use types::suitability::Suitability;

pub use weather::client::{CurrentWeather, WeatherClient};
pub use weather::error::WeatherFetchError;
