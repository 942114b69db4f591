//! # Liveness Server
//!
//! Answers `GET`/`HEAD` on any path with `200 Bot is running` so an external uptime
//! monitor can tell the process is alive. Shares nothing with the chat side.

use anyhow::{Context, Result};
use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;

pub const LIVENESS_BODY: &str = "Bot is running";

/// Build the liveness router. HEAD is served by the GET routes with the body stripped.
pub fn router() -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/{*path}", get(liveness))
}

async fn liveness() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], LIVENESS_BODY)
}

/// Bind and serve until the process exits.
pub async fn serve(bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind liveness server on {bind}"))?;
    tracing::info!("{}", crate::strings::logs::http_started(bind));
    axum::serve(listener, router())
        .await
        .context("Liveness server stopped")?;
    Ok(())
}
