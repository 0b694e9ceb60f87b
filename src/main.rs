//! Botwatch entrypoint: load config and the model bundle, serve the scoring
//! API. A failed bundle load leaves the service running degraded; inference
//! endpoints fail fast until a restart with a valid bundle.

use botwatch::{
    config::ServiceConfig,
    http::{create_router, AppState},
    logging::StructuredLogger,
    model::ModelBundle,
    service::PredictionService,
    session::SessionStore,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("BOTWATCH_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = ServiceConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(data_dir = ?config.data_dir, bundle = ?config.bundle_path, "botwatch service starting");

    std::fs::create_dir_all(&config.data_dir)?;

    let bundle = match ModelBundle::load(&config.bundle_path) {
        Ok(b) => {
            info!(
                model_type = %b.model_type,
                version = %b.version,
                trees = b.forest.trees.len(),
                "model bundle loaded"
            );
            Some(Arc::new(b))
        }
        Err(e) => {
            warn!(error = %e, "model bundle unavailable; serving degraded");
            None
        }
    };

    let store = SessionStore::new(&config.data_dir);
    let service = Arc::new(PredictionService::new(bundle, store));
    let app = create_router(AppState { service });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("botwatch service stopping");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
