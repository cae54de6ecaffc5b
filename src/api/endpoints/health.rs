//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub session_id: String,
    pub version: &'static str,
}

/// `GET /api/health` — liveness plus the current session ID.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let session_id = ctx.core.session_id()?;

    Ok(Json(HealthResponse {
        status: "ok",
        session_id: session_id.to_string(),
        version: crate::config::APP_VERSION,
    }))
}
