//! Error handling for the KrishiMitra Platform
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    // External service errors
    #[error("Completion API error: {0}")]
    LlmApi(String),

    #[error("Weather service unavailable")]
    WeatherServiceUnavailable,

    #[error("Weather API error: {0}")]
    WeatherApi(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("अमान्य इनपुट: {}", msg),
                },
            ),
            AppError::MissingParameter(field) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "MISSING_PARAMETER".to_string(),
                    message_en: format!("{} is required", field),
                    message_hi: format!("{} आवश्यक है", field),
                },
            ),
            AppError::LlmApi(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "LLM_API_ERROR".to_string(),
                    message_en: format!("Completion API error: {}", msg),
                    message_hi: "एआई सेवा से उत्तर प्राप्त नहीं हो सका".to_string(),
                },
            ),
            AppError::WeatherServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message_en: "Weather service is temporarily unavailable".to_string(),
                    message_hi: "मौसम सेवा अस्थायी रूप से अनुपलब्ध है".to_string(),
                },
            ),
            AppError::WeatherApi(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "WEATHER_API_ERROR".to_string(),
                    message_en: format!("Weather API error: {}", msg),
                    message_hi: "मौसम डेटा प्राप्त नहीं हो सका".to_string(),
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_hi: "आंतरिक सर्वर त्रुटि".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
