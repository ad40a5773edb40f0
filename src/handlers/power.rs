use axum::{extract::State, http::StatusCode, response::Json};

use crate::error::Result;
use crate::models::{PowerStatusResponse, TogglePayload, ToggleRequest};
use crate::services::PlugService;

/// Polls every configured plug, persists the successful readings and
/// returns the aggregate with the running daily cost.
pub async fn get_power_status(
    State(service): State<PlugService>,
) -> Result<Json<PowerStatusResponse>> {
    let response = service.poll_all().await?;
    Ok(Json(response))
}

pub async fn toggle(
    State(service): State<PlugService>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<TogglePayload>> {
    let payload = service.toggle(&request.device).await?;
    Ok(Json(payload))
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
