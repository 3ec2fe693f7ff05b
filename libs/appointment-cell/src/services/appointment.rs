use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{load_records, save_records, Collection};
use shared_models::error::AppError;
use shared_models::records::{parse_date, DATE_FORMAT};
use shared_models::{Appointment, Doctor, Patient};
use shared_utils::AppState;

use crate::models::{AppointmentError, AppointmentSearchQuery, BookAppointmentRequest};
use crate::services::booking::validate_new_appointment;
use crate::services::lifecycle::cancel_appointment;
use crate::services::upcoming::upcoming_within;

pub struct AppointmentService {
    state: Arc<AppState>,
}

impl AppointmentService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub async fn book_appointment(&self, request: BookAppointmentRequest) -> Result<Appointment, AppError> {
        let _guard = self.state.lock_writes().await;

        let store = self.state.store.as_ref();
        let patients: Vec<Patient> = load_records(store, Collection::Patients).await?;
        let doctors: Vec<Doctor> = load_records(store, Collection::Doctors).await?;
        let mut appointments = self.load_appointments().await?;

        let appointment = validate_new_appointment(
            request,
            &patients,
            &doctors,
            &appointments,
            self.state.clock.now(),
        )?;
        appointments.push(appointment.clone());
        save_records(store, Collection::Appointments, &appointments).await?;

        info!(
            "Appointment {} booked with doctor {} on {} at {}",
            appointment.id, appointment.doctor_id, appointment.date, appointment.time
        );
        Ok(appointment)
    }

    /// Optional filters on date and status.
    pub async fn list_appointments(&self, query: AppointmentSearchQuery) -> Result<Vec<Appointment>, AppError> {
        // Normalise the date filter so "2024-1-8" matches stored "2024-01-08".
        let date = query.date.map(|raw| match parse_date(&raw) {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => raw,
        });

        Ok(self
            .load_appointments()
            .await?
            .into_iter()
            .filter(|a| date.as_ref().map_or(true, |d| &a.date == d))
            .filter(|a| query.status.map_or(true, |s| a.status == s))
            .collect())
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Appointment, AppError> {
        debug!("Fetching appointment: {}", appointment_id);

        self.load_appointments()
            .await?
            .into_iter()
            .find(|a| a.id == appointment_id)
            .ok_or_else(|| AppointmentError::NotFound.into())
    }

    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<Appointment, AppError> {
        let _guard = self.state.lock_writes().await;
        let mut appointments = self.load_appointments().await?;

        let cancelled = cancel_appointment(appointment_id, &appointments)?;
        if let Some(slot) = appointments.iter_mut().find(|a| a.id == cancelled.id) {
            *slot = cancelled.clone();
        }
        save_records(self.state.store.as_ref(), Collection::Appointments, &appointments).await?;

        info!("Appointment {} cancelled", appointment_id);
        Ok(cancelled)
    }

    /// Falls back to the configured window when `hours_ahead` is absent.
    pub async fn upcoming_appointments(&self, hours_ahead: Option<i64>) -> Result<Vec<Appointment>, AppError> {
        let window = hours_ahead.unwrap_or(self.state.config.upcoming_window_hours);
        if window <= 0 {
            return Err(AppointmentError::InvalidWindow.into());
        }

        let appointments = self.load_appointments().await?;
        Ok(upcoming_within(window, &appointments, self.state.clock.now()))
    }

    pub async fn doctor_agenda(&self, doctor_id: &str) -> Result<Vec<Appointment>, AppError> {
        Ok(self
            .load_appointments()
            .await?
            .into_iter()
            .filter(|a| a.doctor_id == doctor_id)
            .collect())
    }

    async fn load_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        Ok(load_records(self.state.store.as_ref(), Collection::Appointments).await?)
    }
}
