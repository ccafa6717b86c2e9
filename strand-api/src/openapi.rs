//! OpenAPI document for the Strand API.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes::health::{HealthDetails, HealthResponse, HealthStatus};
use crate::types::{
    CreateStringRequest, InterpretedQuery, ListStringsResponse, NaturalQueryResponse,
    PaginationMeta,
};
use strand_core::{DerivedProperties, FilterPredicate, StringRecord};

/// OpenAPI documentation for all Strand REST endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Strand API",
        description = "Content-addressed string store with derived-property filters and a natural-language query dialect"
    ),
    paths(
        crate::routes::strings::create_string,
        crate::routes::strings::get_string,
        crate::routes::strings::list_strings,
        crate::routes::strings::natural_filter,
        crate::routes::strings::delete_string,
        crate::routes::health::ping,
        crate::routes::health::liveness,
        crate::routes::health::readiness,
    ),
    components(schemas(
        StringRecord,
        DerivedProperties,
        FilterPredicate,
        CreateStringRequest,
        ListStringsResponse,
        PaginationMeta,
        NaturalQueryResponse,
        InterpretedQuery,
        ApiError,
        ErrorCode,
        HealthResponse,
        HealthStatus,
        HealthDetails,
    )),
    tags(
        (name = "Strings", description = "String storage, analysis, and filtering"),
        (name = "Health", description = "Service health probes"),
    )
)]
pub struct ApiDoc;
