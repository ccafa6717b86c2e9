//! REST API Routes Module
//!
//! Route handlers organized by concern:
//! - String store CRUD + filter endpoints under /api/v1/strings
//! - Health check endpoints under /health (no versioning)
//! - OpenAPI document at /openapi.json
//! - CORS support for browser-based clients

pub mod health;
pub mod strings;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use strand_storage::RecordStore;

use crate::config::ApiConfig;
use crate::openapi::ApiDoc;

// Re-export route creation functions for convenience
pub use health::create_router as health_router;
pub use strings::create_router as strings_router;

// ============================================================================
// OPENAPI ENDPOINT
// ============================================================================

/// Handler for /openapi.json endpoint.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// With no configured origins (dev mode), all origins are allowed; otherwise
/// only the configured origins are.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: development mode - allowing all origins");
        cors.allow_origin(Any)
    } else {
        tracing::info!("CORS: allowing origins: {:?}", config.cors_origins);
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

/// Create the complete API router.
///
/// - String endpoints under /api/v1/strings
/// - Health checks at /health/* (public)
/// - OpenAPI document at /openapi.json
pub fn create_api_router(store: Arc<dyn RecordStore>, api_config: &ApiConfig) -> Router {
    Router::new()
        .nest("/api/v1/strings", strings::create_router(store.clone()))
        .nest("/health", health::create_router(store))
        .route("/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(api_config))
}
