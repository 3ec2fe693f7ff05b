use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{load_records, save_records, Collection};
use shared_models::error::AppError;
use shared_models::records::{parse_date, parse_time};
use shared_models::{Appointment, Doctor};
use shared_utils::AppState;

use crate::models::{AvailabilityQuery, CreateDoctorRequest, DoctorError};
use crate::services::availability::find_available_doctors;
use crate::services::registration::validate_new_doctor;

pub struct DoctorService {
    state: Arc<AppState>,
}

impl DoctorService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, AppError> {
        let _guard = self.state.lock_writes().await;
        let mut doctors = self.load_doctors().await?;

        let doctor = validate_new_doctor(request, &doctors)?;
        doctors.push(doctor.clone());
        save_records(self.state.store.as_ref(), Collection::Doctors, &doctors).await?;

        info!("Doctor {} registered ({})", doctor.id, doctor.specialty);
        Ok(doctor)
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        self.load_doctors().await
    }

    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Doctor, AppError> {
        debug!("Fetching doctor: {}", doctor_id);

        self.load_doctors()
            .await?
            .into_iter()
            .find(|d| d.id == doctor_id)
            .ok_or_else(|| DoctorError::NotFound.into())
    }

    /// Case-insensitive specialty match; an empty result is a not-found.
    pub async fn doctors_by_specialty(&self, specialty: &str) -> Result<Vec<Doctor>, AppError> {
        let wanted = specialty.trim().to_lowercase();

        let matching: Vec<Doctor> = self
            .load_doctors()
            .await?
            .into_iter()
            .filter(|d| d.specialty.to_lowercase() == wanted)
            .collect();

        if matching.is_empty() {
            return Err(DoctorError::SpecialtyNotFound(specialty.to_string()).into());
        }

        Ok(matching)
    }

    pub async fn available_doctors(&self, query: AvailabilityQuery) -> Result<Vec<Doctor>, AppError> {
        let (raw_date, raw_time) = match (query.date, query.time) {
            (Some(date), Some(time)) if !date.trim().is_empty() && !time.trim().is_empty() => (date, time),
            _ => return Err(DoctorError::MissingQueryParams.into()),
        };

        let date = parse_date(&raw_date)
            .ok_or_else(|| DoctorError::InvalidDateTime(format!("'{}' is not YYYY-MM-DD", raw_date)))?;
        let time = parse_time(&raw_time)
            .ok_or_else(|| DoctorError::InvalidDateTime(format!("'{}' is not HH:MM", raw_time)))?;

        let doctors = self.load_doctors().await?;
        let appointments: Vec<Appointment> =
            load_records(self.state.store.as_ref(), Collection::Appointments).await?;

        Ok(find_available_doctors(date, time, &doctors, &appointments))
    }

    async fn load_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        Ok(load_records(self.state.store.as_ref(), Collection::Doctors).await?)
    }
}
