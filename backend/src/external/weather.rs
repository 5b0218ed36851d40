//! Weather API client for fetching current conditions
//!
//! Integrates with a WeatherAPI.com-compatible endpoint and normalizes
//! the nested payload into the flat snapshot the dashboard consumes.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::WeatherSnapshot;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Raw API response
#[derive(Debug, Deserialize)]
struct WapiResponse {
    location: WapiLocation,
    current: WapiCurrent,
    forecast: Option<WapiForecast>,
}

#[derive(Debug, Deserialize)]
struct WapiLocation {
    name: String,
    region: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WapiCurrent {
    temp_c: f64,
    condition: WapiCondition,
    humidity: i32,
    wind_kph: f64,
    feelslike_c: f64,
}

#[derive(Debug, Deserialize)]
struct WapiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WapiForecast {
    forecastday: Vec<WapiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WapiForecastDay {
    day: WapiDay,
}

#[derive(Debug, Deserialize)]
struct WapiDay {
    daily_chance_of_rain: Option<i32>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions and today's rain chance for a location
    pub async fn fetch_current(&self, location: &str) -> AppResult<WeatherSnapshot> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", "1"),
                ("aqi", "no"),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(format!("Request failed: {}", e)))?;

        if response.status().is_server_error() {
            return Err(AppError::WeatherServiceUnavailable);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherApi(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let data: WapiResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherApi(format!("Failed to parse response: {}", e)))?;

        Ok(convert_response(data))
    }
}

/// Convert the raw API payload to our snapshot format
fn convert_response(data: WapiResponse) -> WeatherSnapshot {
    let rain_chance = data
        .forecast
        .as_ref()
        .and_then(|f| f.forecastday.first())
        .and_then(|d| d.day.daily_chance_of_rain)
        .unwrap_or(0);

    WeatherSnapshot {
        temperature: Decimal::from_f64_retain(data.current.temp_c).unwrap_or_default(),
        condition: data.current.condition.text,
        humidity: data.current.humidity,
        wind_speed: Decimal::from_f64_retain(data.current.wind_kph).unwrap_or_default(),
        feels_like: Decimal::from_f64_retain(data.current.feelslike_c).unwrap_or_default(),
        rain_chance,
        location: data.location.name,
        region: data.location.region,
        country: data.location.country,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_flattens_nested_payload() {
        let raw = r#"{
            "location": {"name": "Pune", "region": "Maharashtra", "country": "India"},
            "current": {
                "temp_c": 27.3,
                "condition": {"text": "Partly cloudy"},
                "humidity": 64,
                "wind_kph": 11.2,
                "feelslike_c": 29.1
            },
            "forecast": {"forecastday": [{"day": {"daily_chance_of_rain": 40}}]}
        }"#;
        let data: WapiResponse = serde_json::from_str(raw).unwrap();
        let snapshot = convert_response(data);
        assert_eq!(snapshot.location, "Pune");
        assert_eq!(snapshot.region, "Maharashtra");
        assert_eq!(snapshot.humidity, 64);
        assert_eq!(snapshot.rain_chance, 40);
        assert_eq!(snapshot.condition, "Partly cloudy");
    }

    #[test]
    fn missing_forecast_defaults_rain_chance_to_zero() {
        let raw = r#"{
            "location": {"name": "Pune", "region": "Maharashtra", "country": "India"},
            "current": {
                "temp_c": 27.3,
                "condition": {"text": "Clear"},
                "humidity": 64,
                "wind_kph": 11.2,
                "feelslike_c": 29.1
            }
        }"#;
        let data: WapiResponse = serde_json::from_str(raw).unwrap();
        let snapshot = convert_response(data);
        assert_eq!(snapshot.rain_chance, 0);
    }
}
