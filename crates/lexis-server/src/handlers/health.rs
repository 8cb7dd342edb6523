//! Health check handler

use axum::{extract::State, Json};

use crate::{error::ApiResult, models::HealthResponse, state::AppState};

/// Liveness plus a record count, which also proves the store is reachable.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let records = state.store.lock().count()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records,
        uptime_seconds: state.uptime_seconds(),
    }))
}
