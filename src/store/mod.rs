pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from the persistence boundary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Malformed record in collection {collection}: {source}")]
    Corrupt {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence boundary: a document store holding one collection per entity
/// type, keyed by opaque string identifiers.
///
/// The store knows nothing about entity semantics. Uniqueness rules and
/// reference resolution live above it, in the service layer, so uniqueness
/// protection is a best-effort pre-check unless a backend adds its own
/// unique index underneath.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Insert or replace the document stored under `id`.
    async fn put(&self, collection: &str, id: &str, doc: Value) -> Result<(), StoreError>;

    /// Returns whether a document was actually removed.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    /// Connectivity probe for the health endpoint.
    async fn health_check(&self) -> Result<(), StoreError>;
}
