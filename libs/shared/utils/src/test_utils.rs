use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use shared_config::AppConfig;
use shared_database::{Collection, InMemoryStore, RecordStore};
use shared_models::{Appointment, AppointmentStatus, Doctor, Patient, Weekday};

use crate::clock::FixedClock;
use crate::state::AppState;

pub fn patient(id: &str, name: &str, email: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        age: 34,
        phone: "555-0100".to_string(),
        email: email.to_string(),
        registration_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
    }
}

/// `start`/`end` are `HH:MM`.
pub fn doctor(id: &str, name: &str, specialty: &str, start: &str, end: &str, days: &[Weekday]) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        schedule_start: hhmm(start),
        schedule_end: hhmm(end),
        available_days: days.to_vec(),
    }
}

pub fn appointment(
    id: &str,
    patient_id: &str,
    doctor_id: &str,
    date: &str,
    time: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        doctor_id: doctor_id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        reason: "General checkup".to_string(),
        status,
    }
}

pub fn hhmm(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").expect("fixture time must be HH:MM")
}

/// In-memory store pre-loaded with the given collections.
pub async fn seeded_store(
    patients: &[Patient],
    doctors: &[Doctor],
    appointments: &[Appointment],
) -> InMemoryStore {
    InMemoryStore::new()
        .with(Collection::Patients, to_values(patients))
        .await
        .with(Collection::Doctors, to_values(doctors))
        .await
        .with(Collection::Appointments, to_values(appointments))
        .await
}

pub fn test_state(store: impl RecordStore + 'static, clock: FixedClock) -> Arc<AppState> {
    Arc::new(AppState::new(AppConfig::default(), Arc::new(store), Arc::new(clock)))
}

/// Store whose reads succeed empty and whose writes always fail with a
/// message naming an on-disk path.
pub struct FailingStore;

pub const FAILING_STORE_DETAIL: &str = "disk full while writing /var/clinic/data/patients.json.tmp";

#[async_trait]
impl RecordStore for FailingStore {
    async fn load(&self, _collection: Collection) -> Result<Vec<Value>> {
        Ok(Vec::new())
    }

    async fn save(&self, _collection: Collection, _records: &[Value]) -> Result<()> {
        Err(anyhow!(FAILING_STORE_DETAIL))
    }
}

fn to_values<T: serde::Serialize>(records: &[T]) -> Vec<Value> {
    records
        .iter()
        .map(|record| serde_json::to_value(record).expect("fixture must serialize"))
        .collect()
}
