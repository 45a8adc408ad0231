use crate::CrawlError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is unusable; the crawl never starts
    #[error("{0}")]
    InvalidRequest(String),

    /// The crawl engine returned an error
    #[error("{0}")]
    Crawl(#[from] CrawlError),

    /// The crawl task failed without returning (e.g. it panicked)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Crawl(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Crawl(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Crawl request failed: {}", self);
        } else {
            tracing::debug!("Rejected crawl request: {}", self);
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
