use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use shared_config::AppConfig;

use crate::store::{Collection, RecordStore};

/// One pretty-printed JSON array per collection inside the data directory.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(config: &AppConfig) -> Self {
        Self::at(&config.data_dir)
    }

    pub fn at(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self, collection: Collection) -> Result<Vec<Value>> {
        let path = self.path_for(collection);
        debug!("Loading {} from {}", collection, path.display());

        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
        };

        match serde_json::from_slice::<Value>(&raw)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?
        {
            Value::Array(records) => Ok(records),
            other => Err(anyhow!(
                "Expected a JSON array in {}, found {}",
                path.display(),
                json_kind(&other)
            )),
        }
    }

    async fn save(&self, collection: Collection, records: &[Value]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .await
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;

        let path = self.path_for(collection);
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_vec_pretty(records)?;

        // Rename over the old file so a failed write leaves it intact.
        fs::write(&tmp, body)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved {} {} to {}", records.len(), collection, path.display());
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
