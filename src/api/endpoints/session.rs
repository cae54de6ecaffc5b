//! Session lifecycle endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct RestartResponse {
    pub session_id: String,
}

/// `POST /api/session/restart` — reseed the table and drop history and log.
pub async fn restart(State(ctx): State<ApiContext>) -> Result<Json<RestartResponse>, ApiError> {
    let session_id = ctx.core.restart()?;
    Ok(Json(RestartResponse {
        session_id: session_id.to_string(),
    }))
}
