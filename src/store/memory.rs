use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::OptionsStore;
use crate::error::AdminError;

/// In-memory options store. Data is lost when the store is dropped; used by
/// tests and local development without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records.
    pub fn with_records(records: HashMap<String, Value>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl OptionsStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AdminError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), AdminError> {
        self.records
            .write()
            .await
            .insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_set_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("quick-login").await.unwrap().is_none());

        store
            .set("quick-login", &json!({"login-form": "top"}))
            .await
            .unwrap();
        let value = store.get("quick-login").await.unwrap().unwrap();
        assert_eq!(value["login-form"], "top");

        store
            .set("quick-login", &json!({"login-form": "no"}))
            .await
            .unwrap();
        let value = store.get("quick-login").await.unwrap().unwrap();
        assert_eq!(value["login-form"], "no");
    }
}
