use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::store::{Collection, RecordStore};

#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Value>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with(self, collection: Collection, records: Vec<Value>) -> Self {
        self.collections.write().await.insert(collection, records);
        self
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn load(&self, collection: Collection) -> Result<Vec<Value>> {
        Ok(self
            .collections
            .read()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, collection: Collection, records: &[Value]) -> Result<()> {
        self.collections
            .write()
            .await
            .insert(collection, records.to_vec());
        Ok(())
    }
}
