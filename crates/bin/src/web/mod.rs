//! Browser UI.
//!
//! Routes:
//! - `GET /`: ticker and lens form
//! - `GET /analyze`: metric tables, verdict, profile checklist
//! - `GET /api/analysis`: the report as JSON
//! - `GET /report.pdf`: one-page PDF download
//! - `GET /health`

mod handlers;
mod html;

use anyhow::Context;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use valuelens::data::FinancialsSource;

/// State shared across handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    source: Arc<dyn FinancialsSource>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("source", &self.source.name())
            .finish()
    }
}

/// Build the application router.
pub(crate) fn build_router(source: Arc<dyn FinancialsSource>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", get(handlers::analyze))
        .route("/api/analysis", get(handlers::api_analysis))
        .route("/report.pdf", get(handlers::report_pdf))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { source })
}

/// Run the web server until interrupted.
pub(crate) async fn run_server(addr: SocketAddr, source: Arc<dyn FinancialsSource>) -> anyhow::Result<()> {
    let provider = source.name();
    let app = build_router(source);

    let listener = tokio::net::TcpListener::bind(addr).await.with_context(|| {
        format!("failed to bind {addr}; choose another address with --addr or VALUELENS_ADDR")
    })?;

    info!(provider, "Starting web UI at http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
