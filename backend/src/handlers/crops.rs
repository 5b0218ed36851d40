//! HTTP handlers for crop recommendations

use axum::{extract::State, Json};
use shared::models::SoilParameters;
use shared::validation::validate_soil_parameters;

use crate::error::{AppError, AppResult};
use crate::services::advisory::CropAdvisory;
use crate::AppState;

/// Get AI crop recommendations for the submitted soil parameters
pub async fn get_crop_recommendations(
    State(state): State<AppState>,
    Json(params): Json<SoilParameters>,
) -> AppResult<Json<CropAdvisory>> {
    validate_soil_parameters(&params).map_err(|e| AppError::Validation(e.to_string()))?;

    let advisory = state.advisory.recommend_crops(&params).await?;
    Ok(Json(advisory))
}
