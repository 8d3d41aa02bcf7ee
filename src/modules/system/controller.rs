use axum::{Json, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is reachable", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Root liveness marker", body = RootResponse)
    ),
    tag = "System"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "stockProject API is running".to_string(),
    })
}

/// Browsers probe this on every visit; answer with an empty 204 instead of
/// a 404.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
