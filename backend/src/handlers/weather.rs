//! HTTP handlers for weather data

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::models::WeatherSnapshot;
use shared::validation::validate_location;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for the weather endpoint
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: String,
}

/// Get current weather for a location, cached within the freshness window
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    validate_location(&query.location).map_err(|e| AppError::Validation(e.to_string()))?;

    let snapshot = state.weather.current(query.location.trim()).await?;
    Ok(Json(snapshot))
}
