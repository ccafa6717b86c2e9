//! String REST API Routes
//!
//! Axum route handlers for the string store: create, read-by-value,
//! structured filter listing, natural-language filtering, and delete.
//! Records are addressed by content, not by id: the path segment for read
//! and delete is the raw string value, hashed on arrival.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use strand_core::{compute_content_hash, StringRecord, MAX_VALUE_CHARS};
use strand_storage::RecordStore;

use crate::{
    error::{ApiError, ApiResult, ErrorCode},
    types::{
        CreateStringRequest, InterpretedQuery, ListStringsParams, ListStringsResponse,
        NaturalQueryParams, NaturalQueryResponse, PaginationMeta,
    },
    validation::ValidateNonEmpty,
};

// ============================================================================
// SHARED STATE
// ============================================================================

/// Shared application state for string routes.
#[derive(Clone)]
pub struct StringsState {
    pub store: Arc<dyn RecordStore>,
}

impl StringsState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/strings - Analyze and store a new string
#[utoipa::path(
    post,
    path = "/api/v1/strings",
    tag = "Strings",
    request_body = CreateStringRequest,
    responses(
        (status = 201, description = "String stored with its derived properties", body = StringRecord),
        (status = 409, description = "String already exists", body = ApiError),
        (status = 422, description = "Validation failure", body = ApiError),
    )
)]
pub async fn create_string(
    State(state): State<Arc<StringsState>>,
    Json(req): Json<CreateStringRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.value.is_empty() {
        return Err(ApiError::validation_failed("Field 'value' is required"));
    }
    let char_count = req.value.chars().count();
    if char_count > MAX_VALUE_CHARS {
        return Err(ApiError::validation_failed(format!(
            "Field 'value' exceeds the maximum length of {} characters (got {})",
            MAX_VALUE_CHARS, char_count
        )));
    }

    let record = StringRecord::new(req.value);
    // The store's uniqueness constraint on the content hash is the safety
    // net under racing creates; a duplicate surfaces as 409 here.
    state.store.insert(record.clone())?;

    tracing::info!(id = %record.id, length = record.properties.length, "string stored");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/strings/{value} - Retrieve a string by its value
#[utoipa::path(
    get,
    path = "/api/v1/strings/{value}",
    tag = "Strings",
    params(
        ("value" = String, Path, description = "The exact string value (URL-encoded)")
    ),
    responses(
        (status = 200, description = "The stored record", body = StringRecord),
        (status = 404, description = "String not stored", body = ApiError),
    )
)]
pub async fn get_string(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = compute_content_hash(&value);
    let record = state
        .store
        .get(&id)?
        .ok_or_else(ApiError::record_not_found)?;

    Ok(Json(record))
}

/// GET /api/v1/strings - List strings with optional structured filters
#[utoipa::path(
    get,
    path = "/api/v1/strings",
    tag = "Strings",
    params(
        ("is_palindrome" = Option<String>, Query, description = "Boolean-ish: true/false/1/0"),
        ("min_length" = Option<u32>, Query, description = "Inclusive lower length bound"),
        ("max_length" = Option<u32>, Query, description = "Inclusive upper length bound"),
        ("word_count" = Option<u32>, Query, description = "Exact word count"),
        ("contains_character" = Option<String>, Query, description = "Single character that must occur"),
        ("page" = Option<u32>, Query, description = "1-based page index, pages of 20"),
    ),
    responses(
        (status = 200, description = "Matching records, paginated", body = ListStringsResponse),
        (status = 400, description = "Malformed filter parameter", body = ApiError),
        (status = 422, description = "Conflicting length bounds", body = ApiError),
    )
)]
pub async fn list_strings(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<ListStringsParams>,
) -> ApiResult<impl IntoResponse> {
    let (predicate, page) = params.normalize()?;

    let page = state.store.scan_page(&predicate, page)?;

    // An empty page is a valid response on this path, unlike the
    // natural-language scan where zero matches is a 404.
    let response = ListStringsResponse {
        count: page.items.len() as u64,
        data: page.items,
        filters_applied: predicate,
        pagination: PaginationMeta {
            current_page: page.current_page,
            last_page: page.last_page,
            total: page.total,
        },
    };

    Ok(Json(response))
}

/// GET /api/v1/strings/filter-by-natural-language - Filter via a phrase
#[utoipa::path(
    get,
    path = "/api/v1/strings/filter-by-natural-language",
    tag = "Strings",
    params(
        ("query" = String, Query, description = "Free-text phrase, e.g. 'all single word palindromic strings'")
    ),
    responses(
        (status = 200, description = "Matching records with the interpreted query", body = NaturalQueryResponse),
        (status = 400, description = "Missing or unparseable query", body = ApiError),
        (status = 404, description = "Query parsed but matched nothing", body = ApiError),
        (status = 422, description = "Query parsed into conflicting filters", body = ApiError),
    )
)]
pub async fn natural_filter(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<NaturalQueryParams>,
) -> ApiResult<impl IntoResponse> {
    let phrase = params.query.unwrap_or_default();
    phrase.validate_non_empty("query")?;

    let parsed = strand_nlq::parse(&phrase)?;
    tracing::debug!(
        rules = ?parsed.matched_rules,
        predicate = ?parsed.predicate,
        "natural language query interpreted"
    );

    let records = state.store.scan(&parsed.predicate)?;
    if records.is_empty() {
        return Err(ApiError::from_code(ErrorCode::NoMatches));
    }

    let response = NaturalQueryResponse {
        count: records.len() as u64,
        data: records,
        interpreted_query: InterpretedQuery {
            original: phrase,
            parsed_filters: parsed.predicate,
        },
    };

    Ok(Json(response))
}

/// DELETE /api/v1/strings/{value} - Delete a string by its value
#[utoipa::path(
    delete,
    path = "/api/v1/strings/{value}",
    tag = "Strings",
    params(
        ("value" = String, Path, description = "The exact string value (URL-encoded)")
    ),
    responses(
        (status = 204, description = "String deleted"),
        (status = 404, description = "String not stored", body = ApiError),
    )
)]
pub async fn delete_string(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    let id = compute_content_hash(&value);
    state.store.delete(&id)?;

    tracing::info!(%id, "string deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the string routes router.
pub fn create_router(store: Arc<dyn RecordStore>) -> axum::Router {
    let state = Arc::new(StringsState::new(store));

    axum::Router::new()
        .route(
            "/",
            axum::routing::post(create_string).get(list_strings),
        )
        .route(
            "/filter-by-natural-language",
            axum::routing::get(natural_filter),
        )
        .route(
            "/:value",
            axum::routing::get(get_string).delete(delete_string),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::Response;
    use strand_storage::InMemoryStore;

    fn test_state() -> Arc<StringsState> {
        Arc::new(StringsState::new(Arc::new(InMemoryStore::new())))
    }

    async fn create(state: &Arc<StringsState>, value: &str) -> Response {
        create_string(
            State(state.clone()),
            Json(CreateStringRequest {
                value: value.to_string(),
            }),
        )
        .await
        .into_response()
    }

    async fn list(state: &Arc<StringsState>, params: ListStringsParams) -> Response {
        list_strings(State(state.clone()), Query(params))
            .await
            .into_response()
    }

    async fn natural(state: &Arc<StringsState>, query: Option<&str>) -> Response {
        natural_filter(
            State(state.clone()),
            Query(NaturalQueryParams {
                query: query.map(str::to_string),
            }),
        )
        .await
        .into_response()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_record() {
        let state = test_state();
        let response = create(&state, "Racecar").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["value"], "Racecar");
        assert_eq!(body["id"], body["properties"]["sha256_hash"]);
        assert_eq!(body["properties"]["is_palindrome"], true);
        assert_eq!(body["properties"]["unique_characters"], 5);
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts_and_preserves_first() {
        let state = test_state();
        assert_eq!(create(&state, "hello").await.status(), StatusCode::CREATED);
        assert_eq!(create(&state, "hello").await.status(), StatusCode::CONFLICT);
        assert_eq!(state.store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_and_oversized_values() {
        let state = test_state();
        assert_eq!(
            create(&state, "").await.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let oversized = "x".repeat(MAX_VALUE_CHARS + 1);
        assert_eq!(
            create(&state, &oversized).await.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_get_by_value_roundtrip() {
        let state = test_state();
        create(&state, "hello world").await;

        let response = get_string(State(state.clone()), Path("hello world".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["properties"]["length"], 11);
        assert_eq!(body["properties"]["word_count"], 2);

        let response = get_string(State(state.clone()), Path("absent".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get_by_value_misses() {
        let state = test_state();
        create(&state, "transient").await;

        let response = delete_string(State(state.clone()), Path("transient".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = get_string(State(state.clone()), Path("transient".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = delete_string(State(state.clone()), Path("transient".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_filters_and_echoes_applied_filters() {
        let state = test_state();
        create(&state, "racecar").await;
        create(&state, "level").await;
        create(&state, "not a palindrome").await;

        let response = list(
            &state,
            ListStringsParams {
                is_palindrome: Some("true".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["filters_applied"], serde_json::json!({"is_palindrome": true}));
        assert_eq!(body["pagination"]["total"], 2);
        assert_eq!(body["pagination"]["current_page"], 1);
        assert_eq!(body["pagination"]["last_page"], 1);
    }

    #[tokio::test]
    async fn test_list_zero_matches_is_an_empty_page_not_an_error() {
        let state = test_state();
        create(&state, "hello").await;

        let response = list(
            &state,
            ListStringsParams {
                min_length: Some("100".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["count"], 0);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_pagination_metadata() {
        let state = test_state();
        for i in 0..25 {
            create(&state, &format!("value number {i}")).await;
        }

        let response = list(&state, ListStringsParams::default()).await;
        let body = body_json(response).await;
        assert_eq!(body["count"], 20);
        assert_eq!(body["pagination"]["last_page"], 2);
        assert_eq!(body["pagination"]["total"], 25);

        let response = list(
            &state,
            ListStringsParams {
                page: Some("2".to_string()),
                ..Default::default()
            },
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["count"], 5);
        assert_eq!(body["pagination"]["current_page"], 2);
    }

    #[tokio::test]
    async fn test_list_rejects_malformed_parameters() {
        let state = test_state();
        let response = list(
            &state,
            ListStringsParams {
                is_palindrome: Some("perhaps".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = list(
            &state,
            ListStringsParams {
                min_length: Some("10".to_string()),
                max_length: Some("5".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_natural_filter_happy_path_with_echo() {
        let state = test_state();
        create(&state, "racecar").await;
        create(&state, "two words").await;

        let response = natural(&state, Some("all single word palindromic strings")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["value"], "racecar");
        assert_eq!(
            body["interpreted_query"]["original"],
            "all single word palindromic strings"
        );
        assert_eq!(
            body["interpreted_query"]["parsed_filters"],
            serde_json::json!({"is_palindrome": true, "word_count": 1})
        );
    }

    #[tokio::test]
    async fn test_natural_filter_error_statuses() {
        let state = test_state();
        create(&state, "hello").await;

        // Missing and empty query.
        assert_eq!(
            natural(&state, None).await.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            natural(&state, Some("")).await.status(),
            StatusCode::BAD_REQUEST
        );

        // No rule fires.
        assert_eq!(
            natural(&state, Some("banana split")).await.status(),
            StatusCode::BAD_REQUEST
        );

        // Parsed fine, zero matches.
        assert_eq!(
            natural(&state, Some("strings longer than 500 characters"))
                .await
                .status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_natural_filter_letter_and_length_phrase() {
        let state = test_state();
        create(&state, "banana boat").await;
        create(&state, "kiwi").await;

        let response = natural(
            &state,
            Some("strings longer than 5 characters containing the letter a"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["value"], "banana boat");
        assert_eq!(
            body["interpreted_query"]["parsed_filters"],
            serde_json::json!({"min_length": 6, "contains_character": "a"})
        );
    }

    #[test]
    fn test_router_construction() {
        let _router = create_router(Arc::new(InMemoryStore::new()));
    }
}
