use std::fmt;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Patients,
    Doctors,
    Appointments,
}

impl Collection {
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Patients => "patients.json",
            Collection::Doctors => "doctors.json",
            Collection::Appointments => "appointments.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Patients => write!(f, "patients"),
            Collection::Doctors => write!(f, "doctors"),
            Collection::Appointments => write!(f, "appointments"),
        }
    }
}

/// Whole-collection persistence. Every save replaces the stored sequence.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns an empty sequence when nothing has been persisted yet.
    async fn load(&self, collection: Collection) -> Result<Vec<Value>>;

    async fn save(&self, collection: Collection, records: &[Value]) -> Result<()>;
}

pub async fn load_records<T>(store: &dyn RecordStore, collection: Collection) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    store
        .load(collection)
        .await?
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .with_context(|| format!("Malformed record #{} in {}", index, collection))
        })
        .collect()
}

pub async fn save_records<T>(store: &dyn RecordStore, collection: Collection, records: &[T]) -> Result<()>
where
    T: Serialize,
{
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<Value>, _>>()
        .with_context(|| format!("Failed to serialize {}", collection))?;

    store.save(collection, &values).await
}
