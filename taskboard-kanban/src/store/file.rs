//! File-backed document store
//!
//! ```text
//! <root>/
//! ├── boards/{id}.json
//! ├── users/{id}.json
//! ├── tags/{id}.json
//! └── activity/{id}.json
//! ```
//!
//! Each write replaces the whole file through a temp file and a rename, so a
//! reader never sees a half-written document. There is no locking across a
//! read and the following write.

use super::{Collection, Document, DocumentStore, Fields, StoreError, StoreResult};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Documents stored as pretty-printed JSON files under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.as_str())
    }

    pub fn document_path(&self, collection: Collection, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{id}.json"))
    }

    /// Create every collection directory. Idempotent.
    pub async fn create_directories(&self) -> StoreResult<()> {
        for collection in Collection::ALL {
            fs::create_dir_all(self.collection_dir(collection)).await?;
        }
        Ok(())
    }

    /// Path of a document, refusing ids that would leave the collection
    /// directory
    fn checked_path(&self, collection: Collection, id: &str) -> StoreResult<PathBuf> {
        let escapes = id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\', '\0']);
        if escapes {
            return Err(StoreError::InvalidId {
                collection,
                id: id.to_string(),
            });
        }
        Ok(self.document_path(collection, id))
    }

    async fn read_fields(&self, collection: Collection, id: &str) -> StoreResult<Option<Fields>> {
        let path = self.checked_path(collection, id)?;
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(fields) => Ok(Some(fields)),
            _ => Err(StoreError::Malformed {
                collection,
                id: id.to_string(),
            }),
        }
    }

    async fn write_fields(&self, collection: Collection, id: &str, fields: Fields) -> StoreResult<()> {
        let path = self.checked_path(collection, id)?;
        let content = serde_json::to_string_pretty(&Value::Object(fields))?;
        atomic_write(&path, content.as_bytes()).await
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        Ok(self
            .read_fields(collection, id)
            .await?
            .map(|fields| Document::new(id, fields)))
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        let dir = self.collection_dir(collection);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();

        let mut docs = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(fields) = self.read_fields(collection, &id).await? {
                docs.push(Document::new(id, fields));
            }
        }
        Ok(docs)
    }

    async fn create(&self, collection: Collection, id: &str, fields: Fields) -> StoreResult<()> {
        if self.checked_path(collection, id)?.exists() {
            return Err(StoreError::AlreadyExists {
                collection,
                id: id.to_string(),
            });
        }
        self.write_fields(collection, id, fields).await
    }

    async fn update(&self, collection: Collection, id: &str, fields: Fields) -> StoreResult<()> {
        let mut existing =
            self.read_fields(collection, id)
                .await?
                .ok_or_else(|| StoreError::Missing {
                    collection,
                    id: id.to_string(),
                })?;
        existing.extend(fields);
        self.write_fields(collection, id, existing).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()> {
        match fs::remove_file(self.checked_path(collection, id)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write a file by writing a sibling temp file and renaming it into place
async fn atomic_write(path: &Path, content: &[u8]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension(format!("{}.tmp", ulid::Ulid::new()));
    fs::write(&temp_path, content).await?;
    fs::rename(&temp_path, path).await?;

    Ok(())
}
