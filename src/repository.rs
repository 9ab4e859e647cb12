use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::models::Entity;
use crate::store::{DocumentStore, StoreError};

/// Typed record access over the document store, one repository per entity
/// collection. Identifiers are assigned here at creation time.
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _phantom: PhantomData,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let docs = self.store.list(T::COLLECTION).await?;
        docs.into_iter().map(decode::<T>).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(T::COLLECTION, id).await? {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    /// Persist the record, assigning a fresh identifier when none is set.
    /// Writes are full-document replaces; saving under an unknown id inserts.
    pub async fn save(&self, mut entity: T) -> Result<T, StoreError> {
        let id = match entity.id() {
            Some(id) => id.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                entity.set_id(id.clone());
                id
            }
        };

        let doc = encode(&entity)?;
        self.store.put(T::COLLECTION, &id, doc).await?;
        Ok(entity)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete(T::COLLECTION, id).await
    }

    /// Scan the collection for records matching `predicate`. Filtering
    /// happens in memory after a full fetch; no pagination.
    pub async fn find_where<F>(&self, predicate: F) -> Result<Vec<T>, StoreError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    pub async fn find_one_where<F>(&self, predicate: F) -> Result<Option<T>, StoreError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .find(|record| predicate(record)))
    }
}

fn encode<T: Entity>(entity: &T) -> Result<Value, StoreError> {
    serde_json::to_value(entity).map_err(|source| StoreError::Corrupt {
        collection: T::COLLECTION.to_string(),
        source,
    })
}

fn decode<T: Entity>(doc: Value) -> Result<T, StoreError> {
    serde_json::from_value(doc).map_err(|source| StoreError::Corrupt {
        collection: T::COLLECTION.to_string(),
        source,
    })
}
