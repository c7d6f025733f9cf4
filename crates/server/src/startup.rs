use std::{net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::{bootstrap, Catalog};

use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the collections, seed them if configured, and build the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let data_dir = cfg.storage.data_dir.as_deref();
    common::env::ensure_env(data_dir).await?;

    let catalog = Catalog::open(data_dir.map(Path::new)).await?;
    if cfg.seed.enabled {
        bootstrap::load_seed_data(&catalog).await?;
    }

    Ok(routes::build_router(catalog, build_cors()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
