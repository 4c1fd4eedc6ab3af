use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::types::*;
use crate::error::MetadexError;
use crate::models::Metadata;
use crate::query::{self, paging};
use crate::store::WriteOutcome;
use crate::validate::Validate;

use super::router::AppState;

/// Error wrapper for API handlers
pub enum ApiError {
    Metadex(MetadexError),
    BadRequest(String),
}

impl From<MetadexError> for ApiError {
    fn from(e: MetadexError) -> Self {
        ApiError::Metadex(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Metadex(e) => {
                let error_type = match &e {
                    MetadexError::NoSuchField(_) => "no_such_field",
                    MetadexError::RecordNotFound(_) => "record_not_found",
                    MetadexError::Validation(_) => "validation_failed",
                    MetadexError::InvalidPaging(_) => "invalid_paging",
                };
                let status = match &e {
                    MetadexError::RecordNotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, error_type, e.to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Store a record, assigning an id when the client did not provide one
pub async fn put_metadata(
    State(state): State<Arc<AppState>>,
    Json(record): Json<Metadata>,
) -> Result<impl IntoResponse, ApiError> {
    store_record(&state, record, None)
}

/// Store or replace the record at the given id; the path id wins over
/// whatever the body carried
pub async fn put_metadata_with_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(record): Json<Metadata>,
) -> Result<impl IntoResponse, ApiError> {
    store_record(&state, record, Some(id))
}

fn store_record(
    state: &AppState,
    mut record: Metadata,
    path_id: Option<Uuid>,
) -> Result<(StatusCode, Json<Metadata>), ApiError> {
    record.validate()?;

    if let Some(id) = path_id {
        record.id = id;
    } else if record.id.is_nil() {
        record.id = Uuid::new_v4();
    }

    match state.store.upsert(record.clone()) {
        WriteOutcome::Created => state.metrics.records_indexed.inc(),
        WriteOutcome::Replaced => state.metrics.records_replaced.inc(),
    }
    state
        .metrics
        .total_records
        .set(state.store.total_records() as f64);

    Ok((StatusCode::CREATED, Json(record)))
}

/// List records, filtered by query predicates and paginated
pub async fn get_metadata(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<impl IntoResponse, ApiError> {
    let timer = state.metrics.search_latency.start_timer();

    let mut predicates = query::parse_query(&uri);
    let params = paging::parse_paging(&predicates)?;

    // Pagination-only parameters never reach the filter
    predicates.remove(paging::OFFSET_PARAMETER);
    predicates.remove(paging::PAGE_SIZE_PARAMETER);

    let results = match state.store.search(&predicates) {
        Ok(results) => results,
        Err(e) => {
            state.metrics.searches_total.with_label_values(&["rejected"]).inc();
            return Err(e.into());
        }
    };
    state.metrics.searches_total.with_label_values(&["ok"]).inc();
    timer.observe_duration();

    let page = paging::page_results(results, params.offset, params.page_size, &uri);
    Ok(Json(page))
}

/// Fetch a single record by id
pub async fn get_metadata_with_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    match state.store.get(id) {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::Metadex(MetadexError::RecordNotFound(id))),
    }
}

/// Delete a record and all of its index entries
pub async fn delete_metadata(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete(id)?;

    state.metrics.records_deleted.inc();
    state
        .metrics
        .total_records
        .set(state.store.total_records() as f64);

    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = state.metrics.registry().gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4",
        )],
        buffer,
    )
}
