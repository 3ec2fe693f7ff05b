// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_models::{AppointmentStatus, Weekday};

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Booking payload; absent fields surface as `MissingField` rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentSearchQuery {
    #[serde(rename = "fecha", alias = "date")]
    pub date: Option<String>,
    #[serde(rename = "estado", alias = "status")]
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpcomingAppointmentsQuery {
    #[serde(rename = "horas", alias = "hours")]
    pub hours_ahead: Option<i64>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid appointment date or time: {0}")]
    InvalidDateTime(String),

    #[error("Patient {0} not found")]
    UnknownPatient(String),

    #[error("Doctor {0} not found")]
    UnknownDoctor(String),

    #[error("Appointment must be scheduled in the future")]
    PastDateTime,

    #[error("The doctor does not work on {0}")]
    DoctorNotWorkingThatDay(Weekday),

    #[error("Requested time is outside the doctor's working hours ({start}-{end})")]
    OutsideWorkingHours { start: String, end: String },

    #[error("The doctor already has an appointment at that time")]
    SlotTaken,

    #[error("Appointment not found")]
    NotFound,

    #[error("Only scheduled appointments can be cancelled (current status: {0})")]
    NotCancellable(AppointmentStatus),

    #[error("Upcoming window must be a positive number of hours")]
    InvalidWindow,
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => AppError::NotFound(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
