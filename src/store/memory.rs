use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError};

/// In-memory document store. Collections are created lazily on first write;
/// documents are kept in id order so listings are stable.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn put(&self, collection: &str, id: &str, doc: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(id))
            .is_some())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn put_get_delete_round_trip() {
        let store = MemoryStore::new();

        store
            .put("animals", "a1", json!({"name": "Leo"}))
            .await
            .unwrap();
        assert_eq!(
            store.get("animals", "a1").await.unwrap(),
            Some(json!({"name": "Leo"}))
        );

        // Replace is a full overwrite
        store
            .put("animals", "a1", json!({"name": "Leonardo"}))
            .await
            .unwrap();
        assert_eq!(store.list("animals").await.unwrap().len(), 1);

        assert!(store.delete("animals", "a1").await.unwrap());
        assert!(!store.delete("animals", "a1").await.unwrap());
        assert_eq!(store.get("animals", "a1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let store = MemoryStore::new();
        store.put("animals", "x", json!({})).await.unwrap();

        assert!(store.list("habitats").await.unwrap().is_empty());
        assert_eq!(store.get("habitats", "x").await.unwrap(), None);
    }
}
