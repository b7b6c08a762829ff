use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use wishmeta_extract::{ExtractError, MetadataPipeline};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<MetadataPipeline>,
}

/// Inbound request body for metadata extraction.
///
/// `url` is optional at the serde level so its absence surfaces as our own
/// 400 validation failure instead of an axum deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct MetadataRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Failure body: `{ "error": message }`, always HTTP 400.
///
/// Validation, transport, and parse failures share this shape by contract;
/// the distinction lives in logs and in the message text only.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/metadata", post(fetch_metadata))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

/// `POST /api/v1/metadata` — run the extraction pipeline for one URL.
///
/// Success is a 200 whose body is exactly the metadata bundle; any failure
/// (bad body, bad url, fetch or parse error) is a 400 [`ApiError`].
async fn fetch_metadata(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<MetadataRequest>, JsonRejection>,
) -> axum::response::Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, "rejected malformed request body");
            return ApiError {
                error: format!("invalid request body: {rejection}"),
            }
            .into_response();
        }
    };

    let url = request.url.unwrap_or_default();
    match state.pipeline.run(&url).await {
        Ok(metadata) => (StatusCode::OK, Json(metadata)).into_response(),
        Err(error) => {
            match &error {
                // Unsupported page formats are worth operator attention.
                ExtractError::Parse { .. } => {
                    tracing::warn!(request_id = %req_id.0, url, error = %error, "unsupported page format");
                }
                ExtractError::Timeout { .. }
                | ExtractError::Transport { .. }
                | ExtractError::Http(_) => {
                    tracing::info!(request_id = %req_id.0, url, error = %error, "page fetch failed");
                }
                ExtractError::Validation { .. } => {
                    tracing::debug!(request_id = %req_id.0, url, error = %error, "rejected request");
                }
            }
            ApiError {
                error: error.to_string(),
            }
            .into_response()
        }
    }
}
