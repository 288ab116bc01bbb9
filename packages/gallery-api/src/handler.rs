use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use gallery_core::{
    DEFAULT_SECTIONS, GalleryImage, ListingError, RenderedImage, ValidationError, find_section,
    validate_folder,
};

#[derive(Debug, Deserialize)]
pub struct ImagesQuery {
    pub folder: Option<String>,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// GET /images?folder=<name>
pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<ImagesQuery>,
) -> Result<Response, AppError> {
    let folder = validate_folder(query.folder.as_deref())?;

    let images = fetch_images(&state, folder).await?;

    Ok(Json(json!({ "images": images })).into_response())
}

/// GET /sections
pub async fn list_sections() -> impl IntoResponse {
    Json(json!({ "sections": DEFAULT_SECTIONS }))
}

/// GET /sections/{slug}/images
///
/// セクションのフォルダを一覧し、グリッド用と全画面用の URL を付けて返す
pub async fn list_section_images(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let section = find_section(&slug).ok_or_else(|| {
        tracing::warn!(slug = %slug, "unknown gallery section");
        AppError::NotFound(format!("unknown section: {slug}"))
    })?;

    let images: Vec<RenderedImage> = fetch_images(&state, section.folder)
        .await?
        .iter()
        .map(|image| state.url_transformer.render(image))
        .collect();

    Ok(Json(json!({ "section": section, "images": images })).into_response())
}

async fn fetch_images(state: &AppState, folder: &str) -> Result<Vec<GalleryImage>, AppError> {
    let images = state.listing_client.list_folder_images(folder).await?;

    tracing::info!(folder = %folder, count = images.len(), "fetched images from folder");
    if let Some(first) = images.first() {
        tracing::info!(folder = %folder, url = %first.url, "sample image url");
    }

    Ok(images)
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!(error = %err, "validation error");
        AppError::BadRequest(err.to_string())
    }
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        tracing::error!(error = %err, "error fetching images");
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
