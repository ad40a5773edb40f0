use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::power::{get_power_status, health, toggle};
use crate::handlers::readings::{get_by_id, list};
use crate::services::PlugService;

pub fn create_router(service: PlugService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/status/power", get(get_power_status))
        .route("/api/toggle", post(toggle))
        .route("/api/readings", get(list))
        .route("/api/readings/{id}", get(get_by_id))
        .fallback_service(ServeDir::new("public"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
