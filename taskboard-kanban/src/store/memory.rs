//! In-memory document store, used by tests and throwaway sessions

use super::{Collection, Document, DocumentStore, Fields, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

/// Documents held in process memory. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, BTreeMap<String, Fields>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create(&self, collection: Collection, id: &str, fields: Fields) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        if docs.contains_key(id) {
            return Err(StoreError::AlreadyExists {
                collection,
                id: id.to_string(),
            });
        }
        docs.insert(id.to_string(), fields);
        Ok(())
    }

    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let existing = collections
            .get_mut(&collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::Missing {
                collection,
                id: id.to_string(),
            })?;
        existing.extend(fields);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(&collection) {
            docs.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_update_merges_top_level_fields() {
        let store = MemoryStore::new();
        store
            .create(Collection::Boards, "b1", fields(json!({"name": "A", "columns": []})))
            .await
            .unwrap();
        store
            .update(Collection::Boards, "b1", fields(json!({"columns": [1]})))
            .await
            .unwrap();

        let doc = store.get(Collection::Boards, "b1").await.unwrap().unwrap();
        assert_eq!(doc.fields["name"], "A");
        assert_eq!(doc.fields["columns"], json!([1]));
    }

    #[tokio::test]
    async fn test_update_missing_document() {
        let store = MemoryStore::new();
        let err = store
            .update(Collection::Tags, "nope", Fields::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Missing { .. }));
    }

    #[tokio::test]
    async fn test_create_twice_fails() {
        let store = MemoryStore::new();
        store.create(Collection::Users, "u1", Fields::new()).await.unwrap();
        let err = store
            .create(Collection::Users, "u1", Fields::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));
        assert_eq!(store.len(Collection::Users).await, 1);
    }

    #[tokio::test]
    async fn test_list_sorted_and_delete() {
        let store = MemoryStore::new();
        for id in ["b", "a", "c"] {
            store.create(Collection::Tags, id, Fields::new()).await.unwrap();
        }
        store.delete(Collection::Tags, "b").await.unwrap();
        store.delete(Collection::Tags, "missing").await.unwrap();

        let ids: Vec<_> = store
            .list(Collection::Tags)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
