//! Document store adapter.
//!
//! Records live in named collections as schema-less JSON documents. The
//! adapter only adds records and lists a whole collection in insertion order.
//! Typed documents are encoded and decoded at this boundary so handlers never
//! touch raw JSON.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A document together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: Uuid,
    pub fields: Value,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Add a document to `collection` and return its new id.
    async fn add_record(&self, collection: &str, fields: Value) -> Result<Uuid>;

    /// Every document in `collection`, oldest first.
    async fn list_records(&self, collection: &str) -> Result<Vec<StoredRecord>>;
}

pub async fn add_document<T>(store: &dyn DocumentStore, collection: &str, doc: &T) -> Result<Uuid>
where
    T: Serialize + Sync,
{
    let fields = serde_json::to_value(doc)
        .with_context(|| format!("Failed to encode {} document", collection))?;
    store.add_record(collection, fields).await
}

/// List and decode a collection. Documents that do not decode are logged
/// and skipped.
pub async fn list_documents<T>(store: &dyn DocumentStore, collection: &str) -> Result<Vec<(Uuid, T)>>
where
    T: DeserializeOwned + Send,
{
    let records = store.list_records(collection).await?;

    let mut documents = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<T>(record.fields) {
            Ok(doc) => documents.push((record.id, doc)),
            Err(e) => {
                tracing::warn!("Skipping malformed {} record {}: {}", collection, record.id, e)
            }
        }
    }

    Ok(documents)
}
