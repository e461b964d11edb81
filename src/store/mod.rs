//! Options store: the persistence layer for plugin configuration.
//!
//! Two logical records live here — the global display options under the
//! `quick-login` key, and one option bag per provider under
//! `quick-login-<provider-id>`. Reads and writes are whole-record; there is no
//! locking, so concurrent saves are last-write-wins (single-administrator
//! assumption).

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgOptionsStore;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::AdminError;
use crate::providers::ProviderStatus;

/// Key of the global display-options record.
pub const GLOBAL_OPTIONS_KEY: &str = "quick-login";

/// Key of a provider's option bag.
pub fn provider_key(provider_id: &str) -> String {
    format!("quick-login-{provider_id}")
}

/// A key-value options store holding JSON records.
#[async_trait]
pub trait OptionsStore: Send + Sync {
    /// Get a record by key. Returns `None` if the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<Value>, AdminError>;

    /// Set a record, replacing any previous value.
    async fn set(&self, key: &str, value: &Value) -> Result<(), AdminError>;
}

/// Read a provider's option bag. Missing record or non-object value yields an
/// empty bag.
pub async fn provider_options(
    store: &dyn OptionsStore,
    provider_id: &str,
) -> Result<Map<String, Value>, AdminError> {
    Ok(store
        .get(&provider_key(provider_id))
        .await?
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default())
}

/// Read a provider's persisted status. A provider that has never been saved
/// needs setup.
pub async fn provider_status(
    store: &dyn OptionsStore,
    provider_id: &str,
) -> Result<ProviderStatus, AdminError> {
    let bag = provider_options(store, provider_id).await?;
    Ok(bag
        .get("status")
        .and_then(|v| v.as_str())
        .and_then(ProviderStatus::parse)
        .unwrap_or_default())
}

/// Merge `patch` into a provider's option bag, preserving keys the patch does
/// not mention.
pub async fn update_provider_options(
    store: &dyn OptionsStore,
    provider_id: &str,
    patch: Map<String, Value>,
) -> Result<(), AdminError> {
    let mut bag = provider_options(store, provider_id).await?;
    for (key, value) in patch {
        bag.insert(key, value);
    }
    store
        .set(&provider_key(provider_id), &Value::Object(bag))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn provider_bag_defaults_to_empty_and_needs_setup() {
        let store = MemoryStore::new();
        let bag = provider_options(&store, "google").await.unwrap();
        assert!(bag.is_empty());
        let status = provider_status(&store, "google").await.unwrap();
        assert_eq!(status, ProviderStatus::NeedsSetup);
    }

    #[tokio::test]
    async fn update_merges_without_clearing_other_keys() {
        let store = MemoryStore::new();
        let mut patch = Map::new();
        patch.insert("client_id".into(), json!("abc"));
        patch.insert("status".into(), json!("enabled"));
        update_provider_options(&store, "google", patch).await.unwrap();

        let mut patch = Map::new();
        patch.insert("status".into(), json!("disabled"));
        update_provider_options(&store, "google", patch).await.unwrap();

        let bag = provider_options(&store, "google").await.unwrap();
        assert_eq!(bag.get("client_id"), Some(&json!("abc")));
        assert_eq!(bag.get("status"), Some(&json!("disabled")));
    }
}
