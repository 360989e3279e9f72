// Handlers: health probe, version, sensor ingest

use axum::extract::{ConnectInfo, State};
use axum::response::IntoResponse;
use bytes::Bytes;
use std::net::SocketAddr;

use super::AppState;
use super::error::ApiError;
use crate::ingest::is_private_source;
use crate::models::SensorPayload;
use crate::version::{NAME, VERSION};

/// GET / — health probe; no side effects.
pub(super) async fn health_handler() -> &'static str {
    "OK"
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST / — one sensor reading. The source check runs before the body is parsed.
pub(super) async fn ingest_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    if !is_private_source(peer.ip()) {
        return Err(ApiError::Forbidden(peer.ip()));
    }
    let payload: SensorPayload = serde_json::from_slice(&body)?;
    let received_at = chrono::Utc::now().timestamp();
    state.ingestor.ingest(&payload, received_at).await?;
    Ok("OK")
}
