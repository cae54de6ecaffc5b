//! HTTP API for the patient lookup tool.
//!
//! Exposes search, intake, table views, CSV export, history/log and
//! dashboard as JSON endpoints under `/api/`.
//!
//! The router is composable — `api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer, ApiServerInfo};
pub use types::ApiContext;
