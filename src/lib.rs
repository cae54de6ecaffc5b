pub mod api;
pub mod config;
pub mod core_state;
pub mod intake;
pub mod models;
pub mod reporting;
pub mod search;
pub mod session;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Initialize tracing. `RUST_LOG` overrides the configured level.
pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter(level))),
        )
        .init();
}

/// Start a seeded session and serve the API until Ctrl-C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let core = Arc::new(core_state::CoreState::new());
    let mut server = api::start_api_server(core, &config.bind_addr()).await?;
    tracing::info!(addr = %server.info.server_addr, "Listening");

    tokio::signal::ctrl_c().await?;
    server.shutdown();
    server.wait().await;
    Ok(())
}
