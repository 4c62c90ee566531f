use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::domain::models::MAX_UPLOAD_BYTES;

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// CORS policy: any origin, GET/POST/DELETE/OPTIONS, `Content-Type` header.
///
/// Every OPTIONS request is answered directly with 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Request body cap for the upload route
pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_UPLOAD_BYTES as usize + MULTIPART_OVERHEAD_BYTES)
}
