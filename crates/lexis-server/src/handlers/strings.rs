//! String resource handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use lexis_core::{analyze, filter_by_query, RecordFilter, StringRecord};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::{ApiError, ApiResult},
    models::{NaturalLanguageParams, NaturalLanguageResponse, StringListResponse},
    state::AppState,
};

/// Analyze and store a new string.
///
/// `400` when `value` is missing or empty, `422` when it is not a string,
/// `409` when the exact value is already stored.
pub async fn create_string(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let value = extract_value(&body)?;

    let record = analyze(&value);
    state.store.lock().insert(record.clone())?;

    info!(id = %record.id, length = record.properties.length, "string created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Fetch one string by exact value.
pub async fn get_string(
    State(state): State<AppState>,
    Path(string_value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    state
        .store
        .lock()
        .get_by_value(&string_value)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("String not found".to_string()))
}

/// List strings matching structured filters.
pub async fn list_strings(
    State(state): State<AppState>,
    filter: Result<Query<RecordFilter>, QueryRejection>,
) -> ApiResult<Json<StringListResponse>> {
    let Query(filter) = filter.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if let (Some(min), Some(max)) = (filter.min_length, filter.max_length) {
        if min > max {
            return Err(ApiError::BadRequest(
                "min_length cannot be greater than max_length".to_string(),
            ));
        }
    }

    let data = state.store.lock().query(&filter)?;
    debug!(count = data.len(), ?filter, "listed strings");

    Ok(Json(StringListResponse {
        count: data.len(),
        data,
        filters_applied: filter,
    }))
}

/// Delete a string by exact value.
pub async fn delete_string(
    State(state): State<AppState>,
    Path(string_value): Path<String>,
) -> ApiResult<StatusCode> {
    if state.store.lock().delete(&string_value)? {
        info!("string deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("String not found".to_string()))
    }
}

/// Filter stored strings with a plain-English query.
///
/// `404` is returned both when nothing is stored (`no_data`) and when the
/// query matched nothing (`no_match`); the error type tells them apart.
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing query parameter".to_string()))?;

    // Snapshot the records, then filter without holding the lock.
    let records = state.store.lock().all()?;
    let outcome = filter_by_query(&query, records)?;

    debug!(
        query = %outcome.query.normalized,
        filters = outcome.query.parsed_filters.len(),
        matches = outcome.matches.len(),
        "natural language filter"
    );

    if outcome.is_no_match() {
        return Err(ApiError::NoMatch);
    }

    Ok(Json(NaturalLanguageResponse {
        count: outcome.matches.len(),
        data: outcome.matches,
        query,
        interpreted_query: outcome.query,
    }))
}

/// Pull a non-empty string `value` out of a request body.
fn extract_value(body: &Value) -> ApiResult<String> {
    match body.get("value") {
        None | Some(Value::Null) => Err(ApiError::BadRequest(
            "Missing \"value\" field".to_string(),
        )),
        Some(Value::String(s)) if s.is_empty() => Err(ApiError::BadRequest(
            "\"value\" must not be empty".to_string(),
        )),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ApiError::InvalidType("\"value\" must be a string".to_string())),
    }
}
