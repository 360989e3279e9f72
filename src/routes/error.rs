// HTTP error mapping for the ingestion endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::net::IpAddr;

use crate::ingest::IngestError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("source address {0} is not on a private network")]
    Forbidden(IpAddr),
    #[error("malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Ingest(IngestError::Payload(_)) => StatusCode::BAD_REQUEST,
            ApiError::Ingest(IngestError::Weather(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Ingest(IngestError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "ingest failed");
            match status {
                StatusCode::BAD_GATEWAY => "Weather lookup unavailable".to_string(),
                _ => "Internal server error".to_string(),
            }
        } else {
            tracing::warn!(error = %self, status = %status, "ingest rejected");
            self.to_string()
        };
        (status, message).into_response()
    }
}
