use crate::api::{ApiError, AppState};
use crate::output::{render_pages, PageSummary};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::any::Any;

/// Body of `POST /api/crawl`
#[derive(Debug, Default, Deserialize)]
pub struct CrawlRequestBody {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub depth: Option<DepthValue>,
}

/// Depth as sent by clients: a JSON integer or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DepthValue {
    Number(i64),
    Text(String),
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    pub url: String,
    pub max_depth: u32,
}

impl CrawlRequestBody {
    /// Checks the body and fills in the default depth
    pub fn validate(self, default_depth: u32) -> Result<CrawlRequest, ApiError> {
        let url = match self.url {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(ApiError::InvalidRequest("Missing URL".to_string())),
        };

        let max_depth = match self.depth {
            None => default_depth,
            Some(DepthValue::Number(n)) => depth_from_i64(n)?,
            Some(DepthValue::Text(text)) => {
                let n = text.trim().parse::<i64>().map_err(|_| {
                    ApiError::InvalidRequest(format!("Invalid depth: '{}'", text))
                })?;
                depth_from_i64(n)?
            }
        };

        Ok(CrawlRequest { url, max_depth })
    }
}

fn depth_from_i64(n: i64) -> Result<u32, ApiError> {
    u32::try_from(n).map_err(|_| {
        ApiError::InvalidRequest(format!("Depth must be a non-negative integer, got {}", n))
    })
}

/// `POST /api/crawl`: runs one crawl and returns every page record
pub async fn crawl_handler(
    State(state): State<AppState>,
    payload: Result<Json<CrawlRequestBody>, JsonRejection>,
) -> Result<Json<Vec<PageSummary>>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    let request = body.validate(state.coordinator.config().crawler.max_depth)?;

    tracing::info!(
        "Crawl requested for {} (depth {})",
        request.url,
        request.max_depth
    );

    // Run on its own task so a panic inside the crawl becomes a 500 response
    let coordinator = state.coordinator.clone();
    let task =
        tokio::spawn(async move { coordinator.run(&request.url, request.max_depth).await });

    match task.await {
        Ok(result) => Ok(Json(render_pages(result?))),
        Err(join_error) if join_error.is_panic() => {
            Err(ApiError::Internal(panic_message(join_error.into_panic())))
        }
        Err(join_error) => Err(ApiError::Internal(join_error.to_string())),
    }
}

/// `GET /health`
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "crawl task panicked".to_string()
    }
}
