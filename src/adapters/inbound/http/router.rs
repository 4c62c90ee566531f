use axum::{
    Router,
    routing::{delete, get, post},
};
use std::{path::Path, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::{
    handlers::{delete_file, download_file, health_check, list_files, upload_file},
    middleware::{cors_layer, upload_body_limit},
};
use crate::ports::services::FileService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub file_service: Arc<dyn FileService>,
}

impl AppState {
    pub fn new(file_service: Arc<dyn FileService>) -> Self {
        Self { file_service }
    }
}

/// Create a router with just the JSON API, mounted under `/api`
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/upload", post(upload_file).layer(upload_body_limit()))
        .route("/files", get(list_files))
        .route("/download/{filename}", get(download_file))
        .route("/delete/{filename}", delete(delete_file))
}

/// Create the main application router.
///
/// Anything outside `/api` is served from `static_dir`; `/` resolves to its
/// `index.html`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .nest("/api", create_api_router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
