use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_models::error::AppError;

/// Registration payload. `availableDays` is kept as raw JSON so that a value
/// of the wrong shape is reported as an invalid days list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub schedule_start: Option<String>,
    pub schedule_end: Option<String>,
    pub available_days: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(rename = "fecha", alias = "date")]
    pub date: Option<String>,
    #[serde(rename = "hora", alias = "time")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DoctorError {
    NotFound,
    MissingField(&'static str),
    InvalidTimeFormat { field: &'static str, value: String },
    InvalidSchedule,
    InvalidDaysList(String),
    DuplicateDoctor { name: String, specialty: String },
    SpecialtyNotFound(String),
    MissingQueryParams,
    InvalidDateTime(String),
}

impl std::fmt::Display for DoctorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoctorError::NotFound => write!(f, "Doctor not found"),
            DoctorError::MissingField(field) => write!(f, "Missing required field: {}", field),
            DoctorError::InvalidTimeFormat { field, value } => {
                write!(f, "Invalid {} '{}', expected HH:MM", field, value)
            }
            DoctorError::InvalidSchedule => write!(f, "Schedule start must be earlier than schedule end"),
            DoctorError::InvalidDaysList(reason) => write!(f, "Invalid available days: {}", reason),
            DoctorError::DuplicateDoctor { name, specialty } => {
                write!(f, "A doctor named {} already exists for {}", name, specialty)
            }
            DoctorError::SpecialtyNotFound(specialty) => {
                write!(f, "No doctors found for specialty {}", specialty)
            }
            DoctorError::MissingQueryParams => write!(f, "date and time query parameters are required"),
            DoctorError::InvalidDateTime(msg) => write!(f, "Invalid date or time: {}", msg),
        }
    }
}

impl std::error::Error for DoctorError {}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound | DoctorError::SpecialtyNotFound(_) => AppError::NotFound(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
