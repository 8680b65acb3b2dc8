use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod rest;
mod task_store;

use config::ServerConfig;
use rest::AppState;
use task_store::TaskStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::load()?;
    info!("Serving frontend from {}", config.dist_dir.display());

    let state = Arc::new(AppState::new(TaskStore::new(config.tasks_file.clone())));
    info!("Serving tasks from {}", state.task_store.path().display());
    let app = rest::build_router(state, &config.dist_dir, &config.allowed_origin)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
