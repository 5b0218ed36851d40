//! Route definitions for the KrishiMitra Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Weather (cached per location)
        .route("/weather", get(handlers::get_weather))
        // Advisory flows
        .route(
            "/crop-recommendations",
            post(handlers::get_crop_recommendations),
        )
        .route("/price-predictions", post(handlers::get_price_predictions))
        .route("/disease-detection", post(handlers::detect_disease))
}
