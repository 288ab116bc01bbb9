pub mod config;
pub mod handler;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use gallery_core::{FolderListingClient, GalleryConfig, UrlTransformer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub listing_client: Arc<FolderListingClient>,
    pub url_transformer: UrlTransformer,
}

impl AppState {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            listing_client: Arc::new(FolderListingClient::new(config)),
            url_transformer: UrlTransformer::new(config),
        }
    }
}

/// ルーターを組み立てる
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(handler::health))
        .route("/images", get(handler::list_images))
        .route("/sections", get(handler::list_sections))
        .route("/sections/{slug}/images", get(handler::list_section_images))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
