use axum::{Json, extract::State};

use crate::adapters::inbound::http::{dto::HealthResponseDto, router::AppState};

/// Name reported by the health check
pub const SERVICE_NAME: &str = "file-server";

/// `GET /api/health`
///
/// Echoes the configured bucket and region. Never contacts the backend, so it
/// answers even when storage is unreachable.
pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponseDto> {
    let location = app_state.file_service.location();

    Json(HealthResponseDto {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        bucket: location.bucket().to_string(),
        region: location.region().to_string(),
    })
}
