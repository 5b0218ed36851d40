//! KrishiMitra Platform - Backend Server
//!
//! A farmer-facing advisory service: proxies soil parameters, crop and
//! district selections, and crop images to an LLM completion API and a
//! weather API, and structures the model's free-text answers into
//! chartable data.

use axum::{routing::get, Router};
use chrono::Duration;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::llm::LlmClient;
use external::weather::WeatherClient;
use services::advisory::AdvisoryService;
use services::weather::{WeatherCache, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub advisory: AdvisoryService,
    pub weather: WeatherService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "km_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting KrishiMitra Platform Server");
    tracing::info!("Environment: {}", config.environment);

    // Build external clients and services
    let llm_client = LlmClient::new(config.llm.clone());
    let weather_client = WeatherClient::new(
        config.weather.api_endpoint.clone(),
        config.weather.api_key.clone(),
    );
    let weather_cache = WeatherCache::new(Duration::minutes(config.weather.cache_ttl_minutes));

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        advisory: AdvisoryService::new(llm_client),
        weather: WeatherService::new(weather_client, weather_cache),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "KrishiMitra Platform API v1.0"
}
