//! Strand API - REST layer for the content-addressed string store
//!
//! Exposes the string store over HTTP (Axum): create, read-by-value,
//! structured filter listing, natural-language filtering, and delete, plus
//! health probes and the OpenAPI document. The transport is deliberately
//! thin - property computation lives in strand-core, query interpretation
//! in strand-nlq, and persistence behind the strand-storage trait.

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use types::*;
