//! Provides the `WeatherClient` for fetching current conditions from an
//! OpenWeatherMap-shaped API.
//!
//! The dashboard only consumes a temperature and a textual description, so
//! the client deserializes exactly that fixed JSON shape and nothing more.

use crate::types::location::LatLon;
use crate::weather::error::WeatherFetchError;
use bon::bon;
use log::{info, warn};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_UNITS: &str = "metric";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Current conditions at a place: a temperature in the requested units and
/// an optional human-readable description.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    main: MainPayload,
    #[serde(default)]
    weather: Vec<ConditionPayload>,
}

#[derive(Debug, Deserialize)]
struct MainPayload {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
    description: String,
}

/// HTTP client for current weather conditions.
///
/// Create one with [`WeatherClient::builder()`], then issue requests with
/// the [`current_weather`](WeatherClient::current_weather) or
/// [`current_weather_at`](WeatherClient::current_weather_at) builders.
///
/// # Examples
///
/// ```no_run
/// # use agroclima::{WeatherClient, WeatherFetchError};
/// # async fn run() -> Result<(), WeatherFetchError> {
/// let client = WeatherClient::builder()
///     .api_key("my-api-key".to_string())
///     .build()?;
///
/// let weather = client
///     .current_weather()
///     .city("Guatemala City")
///     .call()
///     .await?;
/// println!("{:.1} °C", weather.temperature);
/// # Ok(())
/// # }
/// ```
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[bon]
impl WeatherClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.api_key(String)`: **Required.** API key sent with every request.
    /// * `.base_url(String)`: Optional. Defaults to the public
    ///   OpenWeatherMap endpoint; override for proxies and tests.
    /// * `.timeout(Duration)`: Optional. Whole-request deadline, 5 s by
    ///   default.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherFetchError::ClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    #[builder]
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherFetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(WeatherFetchError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
        })
    }

    /// Fetches current conditions for a named city.
    ///
    /// # Arguments
    ///
    /// * `.city(&str)`: **Required.** City name as understood by the API.
    /// * `.units(&str)`: Optional. Measurement units, `"metric"` by default.
    ///
    /// # Errors
    ///
    /// [`WeatherFetchError::NetworkRequest`] for transport failures,
    /// [`WeatherFetchError::HttpStatus`] for non-success responses and
    /// [`WeatherFetchError::Decode`] when the payload does not match the
    /// expected shape.
    #[builder]
    pub async fn current_weather(
        &self,
        city: &str,
        units: Option<&str>,
    ) -> Result<CurrentWeather, WeatherFetchError> {
        let query = [
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", units.unwrap_or(DEFAULT_UNITS)),
        ];
        info!("Requesting current weather for '{city}'");
        self.fetch(&query).await
    }

    /// Fetches current conditions at a coordinate, e.g. one obtained from a
    /// [`LocationProvider`](crate::LocationProvider).
    ///
    /// Takes the same optional `.units(&str)` as
    /// [`current_weather`](WeatherClient::current_weather).
    #[builder]
    pub async fn current_weather_at(
        &self,
        location: LatLon,
        units: Option<&str>,
    ) -> Result<CurrentWeather, WeatherFetchError> {
        let lat = location.0.to_string();
        let lon = location.1.to_string();
        let query = [
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("appid", self.api_key.as_str()),
            ("units", units.unwrap_or(DEFAULT_UNITS)),
        ];
        info!("Requesting current weather at {location:?}");
        self.fetch(&query).await
    }

    async fn fetch(&self, query: &[(&str, &str)]) -> Result<CurrentWeather, WeatherFetchError> {
        let url = format!("{}/weather", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| WeatherFetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!("HTTP error for {url}: {e:?}");
                return Err(if let Some(status) = e.status() {
                    WeatherFetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    WeatherFetchError::NetworkRequest(url, e)
                });
            }
        };

        let payload: WeatherPayload = response
            .json()
            .await
            .map_err(|e| WeatherFetchError::Decode(url, e))?;
        Ok(CurrentWeather {
            temperature: payload.main.temp,
            description: payload
                .weather
                .into_iter()
                .next()
                .map(|condition| condition.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response on a local port and returns
    /// the base URL to reach it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> WeatherClient {
        WeatherClient::builder()
            .api_key("test-key".to_string())
            .base_url(base_url)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_the_fixed_payload_shape() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"main":{"temp":24.5},"weather":[{"description":"cielo claro"}]}"#,
        )
        .await;
        let client = client_for(base);
        let weather = client
            .current_weather()
            .city("Guatemala City")
            .call()
            .await
            .unwrap();
        assert_eq!(weather.temperature, 24.5);
        assert_eq!(weather.description.as_deref(), Some("cielo claro"));
    }

    #[tokio::test]
    async fn empty_condition_list_degrades_to_no_description() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"main":{"temp":18.0}}"#).await;
        let client = client_for(base);
        let weather = client
            .current_weather()
            .city("Quetzaltenango")
            .units("standard")
            .call()
            .await
            .unwrap();
        assert_eq!(weather.temperature, 18.0);
        assert_eq!(weather.description, None);
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        // Bind then drop a listener so the dialed port is closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}"));
        let error = client
            .current_weather()
            .city("Guatemala City")
            .call()
            .await
            .unwrap_err();
        assert!(matches!(error, WeatherFetchError::NetworkRequest(..)));
    }

    #[tokio::test]
    async fn non_success_status_is_a_typed_error() {
        let base = serve_once("HTTP/1.1 404 Not Found", r#"{"message":"city not found"}"#).await;
        let client = client_for(base);
        let error = client
            .current_weather()
            .city("Nowhere")
            .call()
            .await
            .unwrap_err();
        match error {
            WeatherFetchError::HttpStatus { status, .. } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_a_decode_error() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"unexpected":true}"#).await;
        let client = client_for(base);
        let error = client
            .current_weather()
            .city("Guatemala City")
            .call()
            .await
            .unwrap_err();
        assert!(matches!(error, WeatherFetchError::Decode(..)));
    }

    #[tokio::test]
    async fn fetches_by_coordinate() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"main":{"temp":21.3},"weather":[{"description":"lluvia ligera"}]}"#,
        )
        .await;
        let client = client_for(base);
        let weather = client
            .current_weather_at()
            .location(LatLon(14.6349, -90.5069))
            .call()
            .await
            .unwrap();
        assert_eq!(weather.temperature, 21.3);
        assert_eq!(weather.description.as_deref(), Some("lluvia ligera"));
    }
}
