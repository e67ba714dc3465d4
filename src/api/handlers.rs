//! API request handlers
//!
//! Conversion endpoints take the catalog workbook as the raw request body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use super::server::AppState;
use crate::config::CatalogConstants;
use crate::core::{self, missing_columns};
use crate::error::FeedError;
use crate::excel::{CatalogImporter, FeedExporter, FEED_FILE_NAME, XLSX_MIME_TYPE};
use crate::preview::render_preview_page;
use crate::types::{OutputTable, Template};

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Map a conversion failure to a status code and JSON error body
fn error_response(err: FeedError) -> Response {
    let status = match &err {
        FeedError::MissingColumns(_) => StatusCode::UNPROCESSABLE_ENTITY,
        e if e.is_input_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(status = status.as_u16(), "conversion failed: {}", err);
    (status, Json(ApiResponse::<()>::err(err.to_string()))).into_response()
}

fn empty_body_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::err(
            "Request body is empty: upload the catalog .xlsx as the request body",
        )),
    )
        .into_response()
}

/// Import + convert off the async runtime
async fn convert_upload(
    body: Bytes,
    template: Template,
    constants: CatalogConstants,
) -> Result<OutputTable, FeedError> {
    tokio::task::spawn_blocking(move || {
        let table = CatalogImporter::from_bytes(&body)?;
        core::convert(&table, template, &constants)
    })
    .await
    .map_err(|e| FeedError::Export(format!("Conversion task failed: {}", e)))?
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "OilFeed API Server".to_string(),
        version: state.version.clone(),
        description: "Motor-oil catalog to eBay bulk-listing feed converter".to_string(),
        endpoints: vec![
            EndpointInfo::new("/health", "GET", "Health check endpoint"),
            EndpointInfo::new("/version", "GET", "Get server version"),
            EndpointInfo::new(
                "/api/v1/convert",
                "POST",
                "Convert a catalog (.xlsx body) to an eBay workbook; ?template=full|minimal",
            ),
            EndpointInfo::new(
                "/api/v1/preview",
                "POST",
                "Render the HTML description preview of a catalog (.xlsx body)",
            ),
            EndpointInfo::new(
                "/api/v1/columns",
                "POST",
                "List detected and missing columns of a catalog (.xlsx body)",
            ),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub templates: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        templates: [Template::Full, Template::Minimal]
            .iter()
            .map(|t| t.name().to_string())
            .collect(),
    }))
}

/// Convert query parameters
#[derive(Deserialize, Default)]
pub struct ConvertQuery {
    #[serde(default)]
    pub template: Option<Template>,
}

/// POST /api/v1/convert - Catalog workbook in, eBay workbook out
pub async fn convert(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!("rejected convert query: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::err(format!(
                    "Invalid query: {} (expected template=full or template=minimal)",
                    rejection.body_text()
                ))),
            )
                .into_response();
        }
    };
    if body.is_empty() {
        return empty_body_response();
    }

    let template = query.template.unwrap_or_default();
    let feed = match convert_upload(body, template, state.constants.clone()).await {
        Ok(feed) => feed,
        Err(e) => return error_response(e),
    };

    match FeedExporter::new(&feed).to_buffer() {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX_MIME_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", FEED_FILE_NAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/v1/preview - Catalog workbook in, HTML preview out
pub async fn preview(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    if body.is_empty() {
        return empty_body_response();
    }

    match convert_upload(body, Template::Full, state.constants.clone()).await {
        Ok(feed) => Html(render_preview_page(FEED_FILE_NAME, &feed.descriptions())).into_response(),
        Err(e) => error_response(e),
    }
}

/// Columns response
#[derive(Serialize, Default)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
    pub missing: Vec<String>,
    pub rows: usize,
    pub valid: bool,
}

/// POST /api/v1/columns - Detected (normalized) and missing columns
pub async fn columns(body: Bytes) -> Response {
    if body.is_empty() {
        return empty_body_response();
    }

    let imported = tokio::task::spawn_blocking(move || CatalogImporter::from_bytes(&body))
        .await
        .map_err(|e| FeedError::Import(format!("Import task failed: {}", e)))
        .and_then(|result| result);

    match imported {
        Ok(table) => {
            let missing = missing_columns(table.columns());
            Json(ApiResponse::ok(ColumnsResponse {
                columns: table.columns().to_vec(),
                valid: missing.is_empty(),
                missing,
                rows: table.len(),
            }))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}
