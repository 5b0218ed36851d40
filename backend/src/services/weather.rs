//! Weather service with a time-boxed response cache
//!
//! Repeated dashboard loads for the same location inside the freshness
//! window are served from memory instead of hitting the weather API.
//! Entries are keyed per location, so switching between two locations
//! does not evict either one.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use shared::models::{WeatherCacheEntry, WeatherSnapshot};

use crate::error::AppResult;
use crate::external::weather::WeatherClient;

/// In-memory per-location cache of weather snapshots
#[derive(Clone)]
pub struct WeatherCache {
    entries: Arc<RwLock<HashMap<String, WeatherCacheEntry>>>,
    max_age: Duration,
}

impl WeatherCache {
    /// Create a cache with the given freshness window
    pub fn new(max_age: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            max_age,
        }
    }

    /// Get a fresh snapshot for a location, or `None` on miss/stale
    pub fn get(&self, location: &str) -> Option<WeatherSnapshot> {
        self.get_at(location, Utc::now())
    }

    /// `get` with an explicit clock, for freshness-window tests
    pub fn get_at(&self, location: &str, now: DateTime<Utc>) -> Option<WeatherSnapshot> {
        let entries = self.entries.read().expect("weather cache lock poisoned");
        let entry = entries.get(location.trim())?;
        if entry.is_stale(now, self.max_age) {
            return None;
        }
        Some(entry.data.clone())
    }

    /// Store a snapshot for a location, overwriting that location's slot
    pub fn set(&self, location: &str, data: WeatherSnapshot) {
        self.set_at(location, data, Utc::now());
    }

    /// `set` with an explicit clock, for freshness-window tests
    pub fn set_at(&self, location: &str, data: WeatherSnapshot, fetched_at: DateTime<Utc>) {
        let mut entries = self.entries.write().expect("weather cache lock poisoned");
        entries.insert(
            location.trim().to_string(),
            WeatherCacheEntry::new(data, fetched_at),
        );
    }
}

/// Weather service: cache gate in front of the weather API client
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    cache: WeatherCache,
}

impl WeatherService {
    pub fn new(client: WeatherClient, cache: WeatherCache) -> Self {
        Self { client, cache }
    }

    /// Current weather for a location, from cache when fresh.
    /// A fetch failure surfaces the error and leaves any cached entry
    /// untouched.
    pub async fn current(&self, location: &str) -> AppResult<WeatherSnapshot> {
        if let Some(snapshot) = self.cache.get(location) {
            tracing::debug!(%location, "weather served from cache");
            return Ok(snapshot);
        }

        tracing::debug!(%location, "fetching fresh weather data");
        let snapshot = self.client.fetch_current(location).await?;
        self.cache.set(location, snapshot.clone());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn snapshot(location: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: Decimal::from(27),
            condition: "Partly cloudy".to_string(),
            humidity: 64,
            wind_speed: Decimal::from(11),
            feels_like: Decimal::from(29),
            rain_chance: 40,
            location: location.to_string(),
            region: "Maharashtra".to_string(),
            country: "India".to_string(),
        }
    }

    #[test]
    fn fresh_entry_is_served() {
        let cache = WeatherCache::new(Duration::minutes(5));
        let now = Utc::now();
        cache.set_at("Pune", snapshot("Pune"), now);
        assert!(cache
            .get_at("Pune", now + Duration::minutes(5) - Duration::milliseconds(1))
            .is_some());
    }

    #[test]
    fn stale_entry_is_a_miss() {
        let cache = WeatherCache::new(Duration::minutes(5));
        let now = Utc::now();
        cache.set_at("Pune", snapshot("Pune"), now);
        assert!(cache
            .get_at("Pune", now + Duration::minutes(5) + Duration::milliseconds(1))
            .is_none());
    }

    #[test]
    fn locations_have_independent_slots() {
        let cache = WeatherCache::new(Duration::minutes(5));
        let now = Utc::now();
        cache.set_at("Pune", snapshot("Pune"), now);
        cache.set_at("Nashik", snapshot("Nashik"), now);
        assert_eq!(cache.get_at("Pune", now).unwrap().location, "Pune");
        assert_eq!(cache.get_at("Nashik", now).unwrap().location, "Nashik");
    }

    #[test]
    fn unknown_location_is_a_miss() {
        let cache = WeatherCache::new(Duration::minutes(5));
        assert!(cache.get("Indore").is_none());
    }
}
