//! HTTP handlers for disease detection

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::validation::validate_image_data;

use crate::error::{AppError, AppResult};
use crate::services::advisory::DiseaseReport;
use crate::AppState;

/// Request body for the disease detection endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDetectionRequest {
    /// Crop photo as a data URL
    pub image_data: Option<String>,
}

/// Analyze an uploaded crop image for diseases
pub async fn detect_disease(
    State(state): State<AppState>,
    Json(request): Json<DiseaseDetectionRequest>,
) -> AppResult<Json<DiseaseReport>> {
    let image_data = request
        .image_data
        .ok_or_else(|| AppError::MissingParameter("imageData".to_string()))?;
    validate_image_data(&image_data).map_err(|e| AppError::Validation(e.to_string()))?;

    let report = state.advisory.detect_disease(image_data).await?;
    Ok(Json(report))
}
