use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::AppState;

use crate::services::StatisticsService;

const NO_APPOINTMENTS: &str = "No appointments registered";

#[axum::debug_handler]
pub async fn get_busiest_doctor(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let statistics_service = StatisticsService::new(&state);

    match statistics_service.busiest_doctor().await? {
        Some(ranking) => Ok(Json(json!(ranking))),
        None => Ok(Json(json!({ "message": NO_APPOINTMENTS }))),
    }
}

#[axum::debug_handler]
pub async fn get_busiest_specialty(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let statistics_service = StatisticsService::new(&state);

    match statistics_service.busiest_specialty().await? {
        Some(ranking) => Ok(Json(json!(ranking))),
        None => Ok(Json(json!({ "message": NO_APPOINTMENTS }))),
    }
}
