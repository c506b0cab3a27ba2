//! Pulseboard HTTP API
//!
//! HTTP and WebSocket layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard` - Rendered view (`?tab=&range=&sidebar=`)
//! - `GET /api/v1/activity` - Recent activity feed
//! - `GET /api/v1/config` - Effective simulator settings
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /api/v1/ws` - Live dashboard session
//!
//! # Example
//!
//! ```rust,ignore
//! use pulseboard::api::{serve, AppState};
//! use pulseboard::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _) = Config::load_default()?;
//!     serve(AppState::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/activity", get(routes::dashboard::get_activity))
        .route("/config", get(routes::dashboard::get_config))
        .route("/ws", get(websocket_handler));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.server);
    let timeout = TimeoutLayer::new(Duration::from_secs(state.config.server.request_timeout_secs));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::not_found)
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured frontend origins; `*` allows any origin
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.server.addr();
    let tick_interval_ms = state.config.simulator.tick_interval_ms;
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(tick_interval_ms, "Pulseboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Pulseboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dashboard::{DashboardView, TimeRange};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let mut config = Config::default();
        config.simulator.seed = Some(7);
        build_router(AppState::new(config))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["active_views"], 0);
    }

    #[tokio::test]
    async fn test_dashboard_default() {
        let response = get(create_test_app(), "/api/v1/dashboard").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let view: DashboardView = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(view.tick, 0);
        assert_eq!(view.header.time_range, TimeRange::Last7Days);
        assert!(view.sidebar.is_some());
        assert_eq!(view.stats.len(), 4);
        assert_eq!(view.stats[0].value, "$45,231");
        assert_eq!(view.chart.bars.len(), 12);
        assert_eq!(view.activity.len(), 5);
    }

    #[tokio::test]
    async fn test_dashboard_with_query() {
        let response = get(create_test_app(), "/api/v1/dashboard?tab=reports&range=30d&sidebar=false").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["header"]["time_range"], "30d");
        assert!(body["sidebar"].is_null());
    }

    #[tokio::test]
    async fn test_dashboard_seed_is_reproducible() {
        let first = json_body(get(create_test_app(), "/api/v1/dashboard").await).await;
        let second = json_body(get(create_test_app(), "/api/v1/dashboard").await).await;
        assert_eq!(first["chart"], second["chart"]);
    }

    #[tokio::test]
    async fn test_dashboard_invalid_tab() {
        let response = get(create_test_app(), "/api/v1/dashboard?tab=settings").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_dashboard_invalid_range() {
        let response = get(create_test_app(), "/api/v1/dashboard?range=1y").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_activity() {
        let response = get(create_test_app(), "/api/v1/activity").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert!(items[0]["initials"].is_string());
        assert!(items[0]["user"].is_string());
    }

    #[tokio::test]
    async fn test_config() {
        let response = get(create_test_app(), "/api/v1/config").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["tick_interval_ms"], 3000);
        assert_eq!(body["seed"], 7);
        assert_eq!(body["trend_mode"], "static");
        assert_eq!(body["initial"]["revenue"], 45231);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = get(create_test_app(), "/api/v1/metrics").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
