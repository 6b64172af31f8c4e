//! `teapot serve` – run the demo HTTP server.

use anyhow::{Context, Result};
use teapot_core::config::ServerConfig;

use crate::web::{build_router, AppState};

pub async fn run_serve(cfg: &ServerConfig, bind: Option<String>, port: Option<u16>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| cfg.bind.clone());
    let port = port.unwrap_or(cfg.port);
    let addr = format!("{bind}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{addr}");
    println!("teapot listening on http://{addr}");

    let app = build_router(AppState::from_config(cfg));
    axum::serve(listener, app)
        .await
        .context("server terminated with an error")?;
    Ok(())
}
