//! HTTP handlers for price predictions

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::advisory::PriceAdvisory;
use crate::AppState;

/// Request body for the price prediction endpoint
#[derive(Debug, Deserialize)]
pub struct PricePredictionRequest {
    pub crop: String,
    pub district: String,
}

/// Get an AI price prediction for a crop in a district
pub async fn get_price_predictions(
    State(state): State<AppState>,
    Json(request): Json<PricePredictionRequest>,
) -> AppResult<Json<PriceAdvisory>> {
    let crop = request.crop.trim();
    let district = request.district.trim();
    if crop.is_empty() || district.is_empty() {
        return Err(AppError::Validation(
            "Crop and district are required".to_string(),
        ));
    }

    let advisory = state.advisory.predict_prices(crop, district).await?;
    Ok(Json(advisory))
}
