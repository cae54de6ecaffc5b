//! Search history and search log endpoints.
//!
//! Four endpoints:
//! - `GET /api/history` / `DELETE /api/history`
//! - `GET /api/log` / `DELETE /api/log`

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::SearchLogEntry;
use crate::reporting::{self, ClearedView, TableView};

/// `GET /api/history` — searched IDs, oldest first.
pub async fn history(
    State(ctx): State<ApiContext>,
) -> Result<Json<TableView<String>>, ApiError> {
    let session = ctx.core.lock_session()?;
    Ok(Json(reporting::render_history(session.searches.history())))
}

/// `DELETE /api/history`
pub async fn clear_history(
    State(ctx): State<ApiContext>,
) -> Result<Json<ClearedView>, ApiError> {
    let cleared = ctx.core.clear_history()?;
    Ok(Json(ClearedView {
        message: reporting::MSG_HISTORY_CLEARED,
        cleared,
    }))
}

/// `GET /api/log` — timestamped searches, oldest first.
pub async fn log(
    State(ctx): State<ApiContext>,
) -> Result<Json<TableView<SearchLogEntry>>, ApiError> {
    let session = ctx.core.lock_session()?;
    Ok(Json(reporting::render_log(session.searches.log())))
}

/// `DELETE /api/log`
pub async fn clear_log(State(ctx): State<ApiContext>) -> Result<Json<ClearedView>, ApiError> {
    let cleared = ctx.core.clear_log()?;
    Ok(Json(ClearedView {
        message: reporting::MSG_LOG_CLEARED,
        cleared,
    }))
}
