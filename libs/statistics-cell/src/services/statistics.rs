use std::sync::Arc;

use tracing::debug;

use shared_database::{load_records, Collection};
use shared_models::error::AppError;
use shared_models::{Appointment, Doctor};
use shared_utils::AppState;

use crate::models::{DoctorRanking, SpecialtyRanking};
use crate::services::ranking::{busiest_doctor, busiest_specialty};

pub struct StatisticsService {
    state: Arc<AppState>,
}

impl StatisticsService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub async fn busiest_doctor(&self) -> Result<Option<DoctorRanking>, AppError> {
        let (appointments, doctors) = self.snapshot().await?;
        debug!("Ranking doctors over {} appointments", appointments.len());

        Ok(busiest_doctor(&appointments, &doctors))
    }

    pub async fn busiest_specialty(&self) -> Result<Option<SpecialtyRanking>, AppError> {
        let (appointments, doctors) = self.snapshot().await?;
        debug!("Ranking specialties over {} appointments", appointments.len());

        Ok(busiest_specialty(&appointments, &doctors))
    }

    async fn snapshot(&self) -> Result<(Vec<Appointment>, Vec<Doctor>), AppError> {
        let store = self.state.store.as_ref();
        let appointments = load_records(store, Collection::Appointments).await?;
        let doctors = load_records(store, Collection::Doctors).await?;
        Ok((appointments, doctors))
    }
}
