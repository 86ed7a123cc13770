use axum::Json;

use crate::api::dto::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "matriz-mensajeria".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
