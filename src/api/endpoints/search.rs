//! Patient search endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::reporting::{self, SearchView};

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub patient_id: String,
}

/// `POST /api/search` — look up one patient by ID.
///
/// Hits and misses both answer 200 with a `found` flag; the attempt is
/// logged either way. Blank input is a 400 and is not logged.
pub async fn find(
    State(ctx): State<ApiContext>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchView>, ApiError> {
    let Json(request) = payload?;
    let outcome = ctx.core.search(&request.patient_id)?;
    Ok(Json(reporting::render_outcome(outcome)))
}
