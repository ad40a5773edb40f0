use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::error::Result;
use crate::models::{Reading, ReadingListResponse, ReadingQueryParams};
use crate::services::PlugService;

pub async fn list(
    State(service): State<PlugService>,
    Query(params): Query<ReadingQueryParams>,
) -> Result<Json<ReadingListResponse>> {
    let response = service.list_readings(params).await?;
    Ok(Json(response))
}

pub async fn get_by_id(
    State(service): State<PlugService>,
    Path(id): Path<i64>,
) -> Result<Json<Reading>> {
    let reading = service.get_reading(id).await?;
    Ok(Json(reading))
}
