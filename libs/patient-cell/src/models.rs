use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// Registration payload. Every field is optional on the wire so that a missing
/// field is reported as a rejection instead of a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatientError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Age must be greater than 0")]
    InvalidAge,

    #[error("Email {email} is already registered")]
    DuplicateEmail { email: String },

    #[error("Patient not found")]
    NotFound,
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound => AppError::NotFound(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
