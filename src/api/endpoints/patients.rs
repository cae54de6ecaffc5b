//! Patient table endpoints.
//!
//! - `GET /api/patients` — full table view
//! - `POST /api/patients` — admin intake form
//! - `GET /api/patients/export` — CSV download

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::intake::PatientForm;
use crate::models::PatientRecord;
use crate::reporting::{self, TableView};

/// `GET /api/patients` — every record in insertion order.
pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<TableView<PatientRecord>>, ApiError> {
    let session = ctx.core.lock_session()?;
    Ok(Json(reporting::render_table(&session.store)))
}

#[derive(Serialize)]
pub struct AddedResponse {
    pub message: String,
    pub patient_id: String,
    pub name: String,
}

/// `POST /api/patients` — append a new record from the admin form.
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PatientForm>, JsonRejection>,
) -> Result<(StatusCode, Json<AddedResponse>), ApiError> {
    let Json(form) = payload?;
    let confirmation = ctx.core.add_patient(form)?;

    Ok((
        StatusCode::CREATED,
        Json(AddedResponse {
            message: confirmation.message(),
            patient_id: confirmation.patient_id,
            name: confirmation.name,
        }),
    ))
}

/// `GET /api/patients/export` — the table as a CSV attachment.
pub async fn export(State(ctx): State<ApiContext>) -> Result<Response, ApiError> {
    let export = ctx.core.export_csv()?;
    let disposition = export.content_disposition();

    Ok((
        [
            (header::CONTENT_TYPE, export.mime.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    )
        .into_response())
}
