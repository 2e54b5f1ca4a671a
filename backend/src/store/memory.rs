use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentStore, StoredRecord};

/// Process-local store. Used when no database is configured and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<StoredRecord>>>,
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn add_record(&self, collection: &str, fields: Value) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredRecord { id, fields });
        Ok(id)
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<StoredRecord>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryStore::default();
        let course = store.add_record("Courses", json!({"courseName": "Rust"})).await.unwrap();

        let courses = store.list_records("Courses").await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, course);
        assert_eq!(courses[0].fields["courseName"], "Rust");

        assert!(store.list_records("webinars").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = MemoryStore::default();
        let first = store.add_record("Courses", json!({})).await.unwrap();
        let second = store.add_record("Courses", json!({})).await.unwrap();
        assert_ne!(first, second);
    }
}
