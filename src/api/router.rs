//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router over a shared `CoreState`.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/search", post(endpoints::search::find))
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route("/patients/export", get(endpoints::patients::export))
        .route(
            "/history",
            get(endpoints::history::history).delete(endpoints::history::clear_history),
        )
        .route(
            "/log",
            get(endpoints::history::log).delete(endpoints::history::clear_log),
        )
        .route("/dashboard", get(endpoints::dashboard::counts))
        .route("/session/restart", post(endpoints::session::restart))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}
