//! Weather data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized weather snapshot served to the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: Decimal,
    pub condition: String,
    pub humidity: i32,
    pub wind_speed: Decimal,
    pub feels_like: Decimal,
    /// Chance of rain today, percent
    pub rain_chance: i32,
    pub location: String,
    pub region: String,
    pub country: String,
}

/// A cached weather snapshot with its fetch time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCacheEntry {
    pub data: WeatherSnapshot,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherCacheEntry {
    pub fn new(data: WeatherSnapshot, fetched_at: DateTime<Utc>) -> Self {
        Self { data, fetched_at }
    }

    /// True when the entry is older than `max_age` at `now`
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: chrono::Duration) -> bool {
        now - self.fetched_at > max_age
    }
}
