// HTTP routes

mod error;
mod http;

pub use error::ApiError;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::ingest::Ingestor;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) ingestor: Arc<Ingestor>,
}

/// Serve with `into_make_service_with_connect_info::<SocketAddr>()`; POST / needs the peer address.
pub fn app(ingestor: Arc<Ingestor>) -> Router {
    let state = AppState { ingestor };
    Router::new()
        .route("/", get(http::health_handler).post(http::ingest_handler)) // GET / + POST /
        .route("/version", get(http::version_handler)) // GET /version
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
