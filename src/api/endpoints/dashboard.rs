//! Live dashboard endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::reporting::{self, DashboardView};

/// `GET /api/dashboard` — total / admitted / discharged tiles.
pub async fn counts(State(ctx): State<ApiContext>) -> Result<Json<DashboardView>, ApiError> {
    let counts = ctx.core.counts()?;
    Ok(Json(reporting::render_counts(counts)))
}
