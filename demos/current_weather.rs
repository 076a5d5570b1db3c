//! Fetches current conditions for Guatemala City.
//!
//! Requires an OpenWeatherMap API key:
//! `OPENWEATHER_API_KEY=... cargo run --example current_weather`

use agroclima::{AgroclimaError, WeatherClient};

#[tokio::main]
async fn main() -> Result<(), AgroclimaError> {
    let api_key = std::env::var("OPENWEATHER_API_KEY").unwrap_or_default();
    let client = WeatherClient::builder().api_key(api_key).build()?;

    let weather = client
        .current_weather()
        .city("Guatemala City")
        .call()
        .await?;

    println!(
        "{:.1} °C ({})",
        weather.temperature,
        weather.description.unwrap_or_else(|| "sin descripción".to_string())
    );
    Ok(())
}
