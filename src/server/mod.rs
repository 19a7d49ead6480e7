//! HTTP transport around the extractor.
//!
//! Routes:
//! - `GET /` serves the single-page analyzer
//! - `GET /health` liveness probe
//! - `POST /api/analyze` takes `{ "content": string }` and returns `Findings`

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::extractor::Extractor;
use crate::findings::Findings;

pub mod error;

pub use error::{ApiError, ErrorBody};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Anything that can turn submitted text into findings
/// WHY: the boundary is tested against a stand-in to prove invalid requests never reach it
pub trait ContentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Findings>;
}

impl ContentAnalyzer for Extractor {
    fn analyze(&self, text: &str) -> Result<Findings> {
        Ok(Extractor::analyze(self, text))
    }
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<dyn ContentAnalyzer>,
    max_content_bytes: usize,
}

/// Build the router around any analyzer
pub fn router(analyzer: Arc<dyn ContentAnalyzer>, config: &ServerConfig) -> Router {
    let state = AppState {
        analyzer,
        max_content_bytes: config.max_content_bytes,
    };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/analyze", post(analyze_content))
        .layer(DefaultBodyLimit::max(config.max_body_bytes()))
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    let extractor = Arc::new(Extractor::new()?);
    let app = router(extractor, &config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!(
        addr = %listener.local_addr()?,
        max_content_bytes = config.max_content_bytes,
        "Channel analyzer listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler keep serving rather than exit immediately
        warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

/// Pull the `content` string out of a request body
pub fn parse_content(body: &[u8]) -> Result<String, ApiError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidContent)?;
    payload
        .get("content")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ApiError::InvalidContent)
}

async fn analyze_content(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Findings>, ApiError> {
    let content = parse_content(&body)?;

    if content.len() > state.max_content_bytes {
        return Err(ApiError::ContentTooLarge {
            size: content.len(),
            limit: state.max_content_bytes,
        });
    }

    // WHY: matching is CPU-bound; keep it off the async workers
    let analyzer = Arc::clone(&state.analyzer);
    let findings = tokio::task::spawn_blocking(move || analyzer.analyze(&content))
        .await
        .map_err(|e| ApiError::AnalysisFailed(e.to_string()))?
        .map_err(|e| ApiError::AnalysisFailed(format!("{e:#}")))?;

    info!(found = findings.total(), "Analyzed submitted content");
    Ok(Json(findings))
}
