use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{load_records, save_records, Collection};
use shared_models::error::AppError;
use shared_models::{Appointment, Patient};
use shared_utils::AppState;

use crate::models::{CreatePatientRequest, PatientError, UpdatePatientRequest};
use crate::services::registration::{apply_patient_update, validate_new_patient};

pub struct PatientService {
    state: Arc<AppState>,
}

impl PatientService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub async fn create_patient(&self, request: CreatePatientRequest) -> Result<Patient, AppError> {
        let _guard = self.state.lock_writes().await;
        let mut patients = self.load_patients().await?;
        debug!("Registering patient against {} existing records", patients.len());

        let patient = validate_new_patient(request, &patients, self.state.clock.today())?;
        patients.push(patient.clone());
        save_records(self.state.store.as_ref(), Collection::Patients, &patients).await?;

        info!("Patient {} registered", patient.id);
        Ok(patient)
    }

    pub async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        self.load_patients().await
    }

    pub async fn get_patient(&self, patient_id: &str) -> Result<Patient, AppError> {
        debug!("Fetching patient: {}", patient_id);

        self.load_patients()
            .await?
            .into_iter()
            .find(|p| p.id == patient_id)
            .ok_or_else(|| PatientError::NotFound.into())
    }

    pub async fn update_patient(
        &self,
        patient_id: &str,
        request: UpdatePatientRequest,
    ) -> Result<Patient, AppError> {
        let _guard = self.state.lock_writes().await;
        let mut patients = self.load_patients().await?;

        let index = patients
            .iter()
            .position(|p| p.id == patient_id)
            .ok_or(PatientError::NotFound)?;

        let updated = apply_patient_update(&patients[index], request, &patients)?;
        patients[index] = updated.clone();
        save_records(self.state.store.as_ref(), Collection::Patients, &patients).await?;

        info!("Patient {} updated", patient_id);
        Ok(updated)
    }

    /// Every appointment booked for the patient, in stored order.
    pub async fn patient_history(&self, patient_id: &str) -> Result<Vec<Appointment>, AppError> {
        let appointments: Vec<Appointment> =
            load_records(self.state.store.as_ref(), Collection::Appointments).await?;

        Ok(appointments
            .into_iter()
            .filter(|a| a.patient_id == patient_id)
            .collect())
    }

    async fn load_patients(&self) -> Result<Vec<Patient>, AppError> {
        Ok(load_records(self.state.store.as_ref(), Collection::Patients).await?)
    }
}
