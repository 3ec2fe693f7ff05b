use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_models::extract::{AppJson, AppQuery};
use shared_utils::AppState;

use crate::models::{AvailabilityQuery, CreateDoctorRequest};
use crate::services::doctor::DoctorService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctor = doctor_service.create_doctor(request).await?;

    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctors = doctor_service.list_doctors().await?;

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctor = doctor_service.get_doctor(&doctor_id).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_doctors_by_specialty(
    State(state): State<Arc<AppState>>,
    Path(specialty): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctors = doctor_service.doctors_by_specialty(&specialty).await?;

    Ok(Json(json!(doctors)))
}

/// An empty result is still a success, answered with a message.
#[axum::debug_handler]
pub async fn get_available_doctors(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctors = doctor_service.available_doctors(query).await?;

    if doctors.is_empty() {
        return Ok(Json(json!({
            "message": "No doctors available for that date and time"
        })));
    }

    Ok(Json(json!(doctors)))
}
